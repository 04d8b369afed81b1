//! Cytotoxic T-cells: the five orbiters that close in for the kill.
//!
//! Angular motion runs continuously from elapsed time; the phase cycle only
//! drives the orbital radius. The retreat after the kill spans Death and
//! Reset together, interpolated over the combined span so the radius is
//! continuous across that interior boundary.

use cgmath::{InnerSpace, Matrix3, Vector3};

use crate::cycle::{CycleState, Phase, PhaseTable};
use crate::easing::{ease_in_out, lerp};
use crate::units::Seconds;

use super::Rgba;

/// Docking distance at the immunological synapse.
pub const CONTACT_RADIUS: f32 = 1.04;
/// How far the cells pull back while the tumour collapses.
pub const RETREAT_RADIUS: f32 = 1.9;

pub const BODY_RADIUS: f32 = 0.175;
pub const BODY_COLOR: Rgba = [0.608, 0.557, 0.941, 1.0];
pub const BODY_EMISSIVE: Rgba = [0.486, 0.431, 0.902, 0.52];

pub const RECEPTOR_RADIUS: f32 = 0.052;
pub const RECEPTOR_OFFSET: f32 = 0.17;
pub const RECEPTOR_COLOR: Rgba = [0.769, 0.722, 1.0, 1.0];
pub const RECEPTOR_EMISSIVE: Rgba = [0.608, 0.557, 0.941, 0.65];

const BOB_SPEED_RATIO: f32 = 0.7;
const BOB_HEIGHT_RATIO: f32 = 0.3;

/// Static orbit parameters for one T-cell.
pub struct TCell {
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub phase_offset: f32,
}

/// The five-cell squad with staggered orbits and speeds.
pub fn squad() -> Vec<TCell> {
    use std::f32::consts::PI;
    [
        (2.0, 0.38, 0.0),
        (2.1, 0.28, PI * 0.65),
        (1.85, 0.46, PI * 1.3),
        (2.2, 0.22, PI * 0.4),
        (1.75, 0.54, PI * 1.8),
    ]
    .into_iter()
    .map(|(orbit_radius, angular_speed, phase_offset)| TCell {
        orbit_radius,
        angular_speed,
        phase_offset,
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TCellPose {
    pub body: Vector3<f32>,
    /// The TCR receptor nub, offset from the body toward the tumour.
    pub receptor: Vector3<f32>,
}

impl TCellPose {
    pub fn spun(self, spin: &Matrix3<f32>) -> Self {
        Self {
            body: spin * self.body,
            receptor: spin * self.receptor,
        }
    }
}

impl TCell {
    /// Orbital radius for the current point in the cycle.
    ///
    /// Docked at exactly [`CONTACT_RADIUS`] throughout Contact, whatever the
    /// elapsed time; every other phase eases between the radius endpoints of
    /// its neighbors.
    pub fn radius(&self, table: &PhaseTable, state: CycleState, elapsed: Seconds) -> f32 {
        let CycleState { phase, progress } = state;
        match phase {
            Phase::Scout => self.orbit_radius,
            Phase::Approach => lerp(self.orbit_radius, CONTACT_RADIUS, ease_in_out(progress)),
            Phase::Contact => CONTACT_RADIUS,
            Phase::Damage => lerp(CONTACT_RADIUS, RETREAT_RADIUS, ease_in_out(progress)),
            Phase::Death | Phase::Reset => {
                let span = table.span_progress(Phase::Death, Phase::Reset, elapsed);
                lerp(RETREAT_RADIUS, self.orbit_radius, ease_in_out(span))
            }
        }
    }

    pub fn pose(&self, table: &PhaseTable, state: CycleState, elapsed: Seconds) -> TCellPose {
        let radius = self.radius(table, state, elapsed);
        let angle = *elapsed * self.angular_speed + self.phase_offset;
        let bob = (*elapsed * self.angular_speed * BOB_SPEED_RATIO + self.phase_offset).sin();
        let body = Vector3::new(
            radius * angle.cos(),
            bob * radius * BOB_HEIGHT_RATIO,
            radius * angle.sin(),
        );
        // Receptor rides the surface facing the tumour at the origin
        let receptor = body - body.normalize() * RECEPTOR_OFFSET;
        TCellPose { body, receptor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::PhaseTable;

    fn radius_at(table: &PhaseTable, cell: &TCell, elapsed: f32) -> f32 {
        let elapsed = Seconds(elapsed);
        cell.radius(table, table.state_at(elapsed), elapsed)
    }

    #[test]
    fn test_docked_radius_is_fixed_during_contact() {
        let table = PhaseTable::immune_response();
        for cell in squad() {
            // Contact runs 7.5..9.5, in any cycle
            for elapsed in [7.6, 8.5, 9.4, 7.6 + 17.0, 8.5 + 34.0] {
                assert_eq!(radius_at(&table, &cell, elapsed), CONTACT_RADIUS);
            }
        }
    }

    #[test]
    fn test_radius_continuous_at_boundaries() {
        let table = PhaseTable::immune_response();
        let epsilon = 1e-4;
        for cell in squad() {
            for boundary in [4.5, 7.5, 9.5, 12.5, 15.0, 17.0] {
                let before = radius_at(&table, &cell, boundary - epsilon);
                let after = radius_at(&table, &cell, boundary + epsilon);
                assert!(
                    (before - after).abs() < 1e-2,
                    "radius jumps at t={boundary}: {before} vs {after}"
                );
            }
        }
    }

    #[test]
    fn test_resting_radius_while_scouting() {
        let table = PhaseTable::immune_response();
        for cell in squad() {
            assert_eq!(radius_at(&table, &cell, 2.0), cell.orbit_radius);
        }
    }

    #[test]
    fn test_receptor_faces_tumour() {
        let table = PhaseTable::immune_response();
        let cell = &squad()[0];
        let elapsed = Seconds(8.0);
        let pose = cell.pose(&table, table.state_at(elapsed), elapsed);
        let body_distance = pose.body.magnitude();
        let receptor_distance = pose.receptor.magnitude();
        assert!(receptor_distance < body_distance);
        assert!((body_distance - receptor_distance - RECEPTOR_OFFSET).abs() < 1e-5);
    }
}
