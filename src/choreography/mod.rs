//! Per-entity animators for the immune response scene.
//!
//! Every animator is a pure function from `(elapsed time, cycle state,
//! static parameters)` to this frame's visual properties. Nothing here keeps
//! state between frames; the cycle state is computed once per frame in
//! [`Choreography::frame`] and handed to every entity, so all entities see a
//! consistent phase within a frame.
//!
//! Interpolation endpoints are chosen so that every property is continuous
//! at every phase boundary, including the wrap from Reset back to Scout.

pub mod cytokine;
pub mod fragment;
pub mod kill_light;
pub mod nk_cell;
pub mod t_cell;
pub mod tumour;

use cgmath::{Matrix3, Rad, Vector3};

use crate::cycle::{CycleState, PhaseTable};
use crate::units::Seconds;
use cytokine::CytokineCloud;
use fragment::{Fragment, FragmentPose};
use nk_cell::NkCell;
use t_cell::{TCell, TCellPose};
use tumour::{Tumour, TumourPose};

/// RGBA color, linear components in [0, 1].
pub type Rgba = [f32; 4];

/// Component-wise linear interpolation between two colors.
pub fn lerp_rgba(from: Rgba, to: Rgba, amount: f32) -> Rgba {
    [
        crate::easing::lerp(from[0], to[0], amount),
        crate::easing::lerp(from[1], to[1], amount),
        crate::easing::lerp(from[2], to[2], amount),
        crate::easing::lerp(from[3], to[3], amount),
    ]
}

/// Evenly distribute `count` directions over the unit sphere with the
/// golden-spiral layout.
pub fn golden_spiral_directions(count: usize) -> Vec<Vector3<f32>> {
    use std::f32::consts::PI;
    (0..count)
        .map(|index| {
            let polar = (-1.0 + 2.0 * index as f32 / count as f32).acos();
            let azimuth = (count as f32 * PI).sqrt() * polar;
            Vector3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            )
        })
        .collect()
}

const SCENE_SPIN_SPEED: f32 = 0.065;

/// Everything the renderer needs for one frame, already in world space.
pub struct Frame {
    pub cycle: CycleState,
    pub tumour: TumourPose,
    /// World positions of the tumour's surface antigen sites.
    pub antigens: Vec<Vector3<f32>>,
    pub antigen_scale: f32,
    pub t_cells: Vec<TCellPose>,
    pub nk_cells: Vec<Vector3<f32>>,
    pub fragments: Vec<FragmentPose>,
    pub cloud_points: Vec<Vector3<f32>>,
    pub kill_light: f32,
}

/// Static cast of the scene plus the phase table that drives it.
pub struct Choreography {
    table: PhaseTable,
    tumour: Tumour,
    t_cells: Vec<TCell>,
    nk_cells: Vec<NkCell>,
    fragments: Vec<Fragment>,
    cloud: CytokineCloud,
}

impl Choreography {
    pub fn new(table: PhaseTable) -> Self {
        Self {
            table,
            tumour: Tumour::new(),
            t_cells: t_cell::squad(),
            nk_cells: nk_cell::patrol(),
            fragments: fragment::burst(),
            cloud: CytokineCloud::new(),
        }
    }

    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    pub fn cloud_point_count(&self) -> usize {
        self.cloud.points().len()
    }

    /// Compute the whole scene for one elapsed-time sample.
    ///
    /// The cycle state is derived exactly once and shared by every entity,
    /// then the slow whole-scene spin is applied uniformly to all world
    /// positions.
    pub fn frame(&self, elapsed: Seconds) -> Frame {
        let state = self.table.state_at(elapsed);
        let spin = Matrix3::from_angle_y(Rad(*elapsed * SCENE_SPIN_SPEED));

        let tumour = self.tumour.pose(&self.table, state, elapsed);
        let antigen_scale = tumour.scale * tumour::ANTIGEN_RADIUS / tumour::BASE_SCALE;
        let antigens = self
            .tumour
            .antigen_sites()
            .iter()
            .map(|site| spin * (*site * tumour.scale))
            .collect();

        let t_cells = self
            .t_cells
            .iter()
            .map(|cell| cell.pose(&self.table, state, elapsed).spun(&spin))
            .collect();

        let nk_cells = self
            .nk_cells
            .iter()
            .map(|cell| spin * cell.position(elapsed))
            .collect();

        let fragments = self
            .fragments
            .iter()
            .filter_map(|fragment| fragment.pose(state))
            .map(|pose| FragmentPose {
                position: spin * pose.position,
                ..pose
            })
            .collect();

        let tilt = self.cloud.orientation(elapsed);
        let cloud_points = self
            .cloud
            .points()
            .iter()
            .map(|point| spin * (tilt * *point))
            .collect();

        Frame {
            cycle: state,
            tumour,
            antigens,
            antigen_scale,
            t_cells,
            nk_cells,
            fragments,
            cloud_points,
            kill_light: kill_light::intensity(state),
        }
    }
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(PhaseTable::immune_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Phase;

    #[test]
    fn test_golden_spiral_directions_are_unit_length() {
        for direction in golden_spiral_directions(14) {
            let length = (direction.x * direction.x
                + direction.y * direction.y
                + direction.z * direction.z)
                .sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_frame_is_deterministic() {
        let choreography = Choreography::default();
        let first = choreography.frame(Seconds(6.25));
        let second = choreography.frame(Seconds(6.25));
        assert_eq!(first.cycle, second.cycle);
        assert_eq!(first.tumour.scale, second.tumour.scale);
        assert_eq!(first.t_cells[0].body, second.t_cells[0].body);
    }

    #[test]
    fn test_fragments_exist_only_during_death() {
        let choreography = Choreography::default();
        assert!(choreography.frame(Seconds(2.0)).fragments.is_empty());
        assert!(choreography.frame(Seconds(10.0)).fragments.is_empty());
        let mid_death = choreography.frame(Seconds(13.5));
        assert_eq!(mid_death.cycle.phase, Phase::Death);
        assert_eq!(mid_death.fragments.len(), fragment::FRAGMENT_COUNT);
    }

    #[test]
    fn test_cloud_ignores_phase() {
        let choreography = Choreography::default();
        // Same wall-clock instant in different cycles gives the same cloud
        let in_scout = choreography.frame(Seconds(1.0));
        assert_eq!(in_scout.cloud_points.len(), choreography.cloud_point_count());
    }
}
