//! Apoptosis fragments: debris that scatters while the tumour collapses.
//!
//! Fragments exist only during the Death phase. They fly outward along
//! golden-spiral directions with eased distance and fade away over the
//! second half of the phase, so nothing is left when Reset begins.

use cgmath::Vector3;

use crate::cycle::{CycleState, Phase};
use crate::easing::ease_in_out;

use super::{golden_spiral_directions, Rgba};

pub const FRAGMENT_COUNT: usize = 12;
pub const COLOR: Rgba = [0.984, 0.573, 0.235, 1.0];
pub const EMISSIVE: Rgba = [0.863, 0.149, 0.149, 0.55];

const SCATTER_DISTANCE: f32 = 2.2;

pub struct Fragment {
    pub direction: Vector3<f32>,
    pub size: f32,
    pub speed: f32,
}

/// One burst of debris with staggered sizes and speeds.
pub fn burst() -> Vec<Fragment> {
    golden_spiral_directions(FRAGMENT_COUNT)
        .into_iter()
        .enumerate()
        .map(|(index, direction)| Fragment {
            direction,
            size: 0.055 + (index % 4) as f32 * 0.035,
            speed: 0.75 + (index % 5) as f32 * 0.22,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentPose {
    pub position: Vector3<f32>,
    pub scale: f32,
    pub opacity: f32,
}

impl Fragment {
    /// `None` outside the Death phase.
    pub fn pose(&self, state: CycleState) -> Option<FragmentPose> {
        let CycleState { phase, progress } = state;
        if phase != Phase::Death {
            return None;
        }
        let distance = ease_in_out(progress) * self.speed * SCATTER_DISTANCE;
        let opacity = if progress < 0.5 {
            1.0
        } else {
            1.0 - (progress - 0.5) * 2.0
        };
        Some(FragmentPose {
            position: self.direction * distance,
            scale: self.size,
            opacity: opacity.clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::PhaseTable;
    use crate::units::Seconds;
    use cgmath::InnerSpace;

    #[test]
    fn test_absent_outside_death() {
        let table = PhaseTable::immune_response();
        for fragment in burst() {
            assert!(fragment.pose(table.state_at(Seconds(1.0))).is_none());
            assert!(fragment.pose(table.state_at(Seconds(10.0))).is_none());
            assert!(fragment.pose(table.state_at(Seconds(16.0))).is_none());
        }
    }

    #[test]
    fn test_scatters_outward_and_fades() {
        let table = PhaseTable::immune_response();
        // Death runs 12.5..15.0
        for fragment in burst() {
            let early = fragment.pose(table.state_at(Seconds(12.6))).unwrap();
            let late = fragment.pose(table.state_at(Seconds(14.9))).unwrap();
            assert!(late.position.magnitude() > early.position.magnitude());
            assert!((early.opacity - 1.0).abs() < 1e-6);
            assert!(late.opacity < 0.1);
        }
    }

    #[test]
    fn test_starts_at_center() {
        let table = PhaseTable::immune_response();
        let fragment = &burst()[0];
        let pose = fragment.pose(table.state_at(Seconds(12.5))).unwrap();
        assert!(pose.position.magnitude() < 1e-5);
    }
}
