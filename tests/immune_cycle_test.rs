/// Integration test for the properties the phase cycle guarantees to the
/// rest of the scene: normalized progress, periodicity, boundary
/// continuity, and the fixed docking radius.
use cytoscene::choreography::t_cell::{squad, CONTACT_RADIUS};
use cytoscene::choreography::tumour::Tumour;
use cytoscene::choreography::{kill_light, Choreography};
use cytoscene::cycle::{CycleState, Phase, PhaseTable};
use cytoscene::units::Seconds;

const PHASE_BOUNDARIES: [f32; 6] = [4.5, 7.5, 9.5, 12.5, 15.0, 17.0];
const EPSILON: f32 = 1e-4;

fn state(table: &PhaseTable, elapsed: f32) -> CycleState {
    table.state_at(Seconds(elapsed))
}

#[test]
fn test_progress_normalized_for_all_times() {
    let table = PhaseTable::immune_response();
    for tick in 0..6800 {
        let elapsed = tick as f32 * 0.01;
        let progress = state(&table, elapsed).progress;
        assert!(
            (0.0..=1.0).contains(&progress),
            "progress {progress} out of range at t={elapsed}"
        );
    }
}

#[test]
fn test_cycle_is_periodic() {
    let table = PhaseTable::immune_response();
    let cycle_length = *table.cycle_length();
    for tick in 0..1700 {
        let elapsed = tick as f32 * 0.01;
        let this_cycle = state(&table, elapsed);
        let next_cycle = state(&table, elapsed + cycle_length);
        assert_eq!(this_cycle.phase, next_cycle.phase, "phase differs at t={elapsed}");
        assert!((this_cycle.progress - next_cycle.progress).abs() < 1e-3);
    }
}

#[test]
fn test_durations_sum_to_cycle_length() {
    let table = PhaseTable::immune_response();
    assert_eq!(*table.cycle_length(), 17.0);
    let last_phase_end = *table.offset_of(Phase::Reset) + *table.duration_of(Phase::Reset);
    assert_eq!(last_phase_end, 17.0);
}

#[test]
fn test_central_body_continuous_at_phase_boundaries() {
    let table = PhaseTable::immune_response();
    let tumour = Tumour::new();
    for boundary in PHASE_BOUNDARIES {
        let just_before = Seconds(boundary - EPSILON);
        let just_after = Seconds(boundary + EPSILON);
        let before = tumour.pose(&table, table.state_at(just_before), just_before);
        let after = tumour.pose(&table, table.state_at(just_after), just_after);

        assert!(
            (before.scale - after.scale).abs() < 1e-2,
            "scale jumps at t={boundary}: {} vs {}",
            before.scale,
            after.scale
        );
        for channel in 0..3 {
            assert!(
                (before.color[channel] - after.color[channel]).abs() < 1e-2,
                "color channel {channel} jumps at t={boundary}"
            );
        }
        assert!(
            (before.emissive[3] - after.emissive[3]).abs() < 1e-2,
            "emission jumps at t={boundary}"
        );
    }
}

#[test]
fn test_orbiter_radius_continuous_at_phase_boundaries() {
    let table = PhaseTable::immune_response();
    for cell in squad() {
        for boundary in PHASE_BOUNDARIES {
            let just_before = Seconds(boundary - EPSILON);
            let just_after = Seconds(boundary + EPSILON);
            let before = cell.radius(&table, table.state_at(just_before), just_before);
            let after = cell.radius(&table, table.state_at(just_after), just_after);
            assert!(
                (before - after).abs() < 1e-2,
                "radius jumps at t={boundary}: {before} vs {after}"
            );
        }
    }
}

#[test]
fn test_contact_radius_is_fixed() {
    let table = PhaseTable::immune_response();
    // Contact runs 7.5..9.5 in every cycle
    for cell in squad() {
        for elapsed in [7.51, 8.0, 8.5, 9.0, 9.49, 25.0, 42.5] {
            let radius = cell.radius(&table, table.state_at(Seconds(elapsed)), Seconds(elapsed));
            assert_eq!(
                radius, CONTACT_RADIUS,
                "cell not docked at t={elapsed}"
            );
        }
    }
}

#[test]
fn test_cycle_starts_and_wraps_in_scout() {
    let table = PhaseTable::immune_response();
    let start = state(&table, 0.0);
    assert_eq!(start.phase, Phase::Scout);
    assert_eq!(start.progress, 0.0);

    let wrapped = table.state_at(table.cycle_length());
    assert_eq!(wrapped.phase, Phase::Scout);
    assert_eq!(wrapped.progress, 0.0);
}

#[test]
fn test_kill_light_burns_only_during_death() {
    let table = PhaseTable::immune_response();
    for tick in 0..1700 {
        let elapsed = tick as f32 * 0.01;
        let current = state(&table, elapsed);
        let intensity = kill_light::intensity(current);
        if current.phase == Phase::Death {
            assert!(intensity >= 0.0);
        } else {
            assert_eq!(intensity, 0.0, "light on outside Death at t={elapsed}");
        }
    }
    let peak = kill_light::intensity(state(&table, 13.75));
    assert!(peak > 3.9, "peak intensity {peak}");
}

#[test]
fn test_frame_census_through_one_cycle() {
    let choreography = Choreography::default();
    for tick in 0..170 {
        let frame = choreography.frame(Seconds(tick as f32 * 0.1));
        assert_eq!(frame.t_cells.len(), 5);
        assert_eq!(frame.nk_cells.len(), 3);
        assert_eq!(frame.cloud_points.len(), choreography.cloud_point_count());
        assert!(frame.tumour.scale >= 0.0);
        if frame.cycle.phase != Phase::Death {
            assert!(frame.fragments.is_empty());
        }
    }
}
