//! The tumour cell at the center of the scene.
//!
//! Scale, color, and emission move through healthy, damaged, dying, gone,
//! and reformed states across the cycle. Each piecewise segment starts where
//! the previous one ended, and ambient pulsing uses whole-cycle waveforms,
//! so every property is continuous at every phase boundary.

use cgmath::Vector3;

use crate::cycle::{CycleState, Phase, PhaseTable};
use crate::easing::{ease_in_out, lerp, wobble};
use crate::units::Seconds;

use super::{golden_spiral_directions, lerp_rgba, Rgba};

pub const BASE_SCALE: f32 = 0.72;
pub const WOUNDED_SCALE: f32 = 0.36;

pub const HEALTHY: Rgba = [0.973, 0.443, 0.443, 1.0];
pub const DAMAGED: Rgba = [0.984, 0.573, 0.235, 1.0];
pub const DYING: Rgba = [0.498, 0.114, 0.114, 1.0];

pub const ANTIGEN_COUNT: usize = 14;
pub const ANTIGEN_RADIUS: f32 = 0.075;
pub const ANTIGEN_COLOR: Rgba = [0.988, 0.647, 0.647, 1.0];
pub const ANTIGEN_EMISSIVE: Rgba = [0.937, 0.267, 0.267, 0.4];

const EMISSIVE_BRIGHT: f32 = 0.32;
const EMISSIVE_DIM: f32 = 0.06;
const EMISSIVE_TINT: f32 = 0.55;

// Pulse amplitudes and whole-cycle counts per phase segment
const PATROL_PULSE: f32 = 0.028;
const CONTACT_PULSE: f32 = 0.022;
const DAMAGE_FLUTTER: f32 = 0.012;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TumourPose {
    pub scale: f32,
    pub color: Rgba,
    /// Emission tint (rgb) with intensity in the alpha slot.
    pub emissive: Rgba,
}

pub struct Tumour {
    antigen_sites: Vec<Vector3<f32>>,
}

impl Tumour {
    pub fn new() -> Self {
        Self {
            antigen_sites: golden_spiral_directions(ANTIGEN_COUNT),
        }
    }

    /// Unit directions of the surface antigen sites.
    pub fn antigen_sites(&self) -> &[Vector3<f32>] {
        &self.antigen_sites
    }

    pub fn pose(&self, table: &PhaseTable, state: CycleState, elapsed: Seconds) -> TumourPose {
        TumourPose {
            scale: self.scale(table, state, elapsed),
            color: Self::color(state),
            emissive: Self::emissive(state),
        }
    }

    fn scale(&self, table: &PhaseTable, state: CycleState, elapsed: Seconds) -> f32 {
        let CycleState { phase, progress } = state;
        let scale = match phase {
            Phase::Scout | Phase::Approach => {
                // The resting pulse breathes across the whole patrol span
                let span = table.span_progress(Phase::Scout, Phase::Approach, elapsed);
                BASE_SCALE * (1.0 + PATROL_PULSE * wobble(2, span))
            }
            Phase::Contact => BASE_SCALE * (1.0 + CONTACT_PULSE * wobble(2, progress)),
            Phase::Damage => {
                lerp(BASE_SCALE, WOUNDED_SCALE, ease_in_out(progress))
                    + DAMAGE_FLUTTER * wobble(3, progress)
            }
            Phase::Death => lerp(WOUNDED_SCALE, 0.0, ease_in_out(progress)),
            Phase::Reset => lerp(0.0, BASE_SCALE, ease_in_out(progress)),
        };
        scale.max(0.0)
    }

    fn color(state: CycleState) -> Rgba {
        let CycleState { phase, progress } = state;
        match phase {
            Phase::Scout | Phase::Approach => HEALTHY,
            Phase::Contact => lerp_rgba(HEALTHY, DAMAGED, ease_in_out(progress)),
            Phase::Damage => lerp_rgba(DAMAGED, DYING, ease_in_out(progress)),
            Phase::Death => DYING,
            Phase::Reset => lerp_rgba(DYING, HEALTHY, ease_in_out(progress)),
        }
    }

    fn emissive(state: CycleState) -> Rgba {
        let CycleState { phase, progress } = state;
        let intensity = match phase {
            Phase::Scout | Phase::Approach | Phase::Contact => EMISSIVE_BRIGHT,
            Phase::Damage => lerp(EMISSIVE_BRIGHT, EMISSIVE_DIM, ease_in_out(progress)),
            Phase::Death => EMISSIVE_DIM,
            Phase::Reset => lerp(EMISSIVE_DIM, EMISSIVE_BRIGHT, ease_in_out(progress)),
        };
        let tint = Self::color(state);
        [
            tint[0] * EMISSIVE_TINT,
            tint[1] * EMISSIVE_TINT,
            tint[2] * EMISSIVE_TINT,
            intensity,
        ]
    }
}

impl Default for Tumour {
    fn default() -> Self {
        Self::new()
    }
}
