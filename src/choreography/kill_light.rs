//! The transient kill light: a red flash from the origin during Death.

use crate::cycle::{CycleState, Phase};
use crate::easing::pulse;

use super::Rgba;

pub const COLOR: Rgba = [1.0, 0.267, 0.267, 1.0];
pub const PEAK_INTENSITY: f32 = 4.0;

/// Intensity ramps up to the peak mid-phase and back to zero, following a
/// half-sine envelope, so it is exactly zero at both Death boundaries and
/// throughout every other phase.
pub fn intensity(state: CycleState) -> f32 {
    match state.phase {
        Phase::Death => PEAK_INTENSITY * pulse(state.progress),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::PhaseTable;
    use crate::units::Seconds;

    #[test]
    fn test_dark_outside_death() {
        let table = PhaseTable::immune_response();
        for elapsed in [0.0, 5.0, 8.0, 11.0, 16.0] {
            assert_eq!(intensity(table.state_at(Seconds(elapsed))), 0.0);
        }
    }

    #[test]
    fn test_peaks_mid_death() {
        let table = PhaseTable::immune_response();
        // Death runs 12.5..15.0, peak at 13.75
        let peak = intensity(table.state_at(Seconds(13.75)));
        assert!((peak - PEAK_INTENSITY).abs() < 1e-3);
        let edge = intensity(table.state_at(Seconds(12.5001)));
        assert!(edge < 0.01);
    }
}
