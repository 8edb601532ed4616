//! Property-based tests for the engine and its driver.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use signal_fsm::core::{OutputVector, State};
use signal_fsm::driver::{Controller, FallingEdgeDetector};
use signal_fsm::intersection::{
    reference_engine, Direction, IntersectionEngine, LampOutputs, Phase, SensorSnapshot,
};
use signal_fsm::render::{OutputRenderer, RecordingActuator};
use signal_fsm::sim::CarQueue;

prop_compose! {
    fn arbitrary_phase()(index in 0..8usize) -> Phase {
        Phase::all()[index]
    }
}

prop_compose! {
    fn arbitrary_snapshot()(
        east_straight in any::<bool>(),
        north_left in any::<bool>(),
        north_right in any::<bool>(),
        west_straight in any::<bool>(),
        west_left in any::<bool>(),
    ) -> SensorSnapshot {
        SensorSnapshot {
            east_straight,
            north_left,
            north_right,
            west_straight,
            west_left,
        }
    }
}

fn arbitrary_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn engine_in(phase: Phase) -> IntersectionEngine {
    let mut engine = reference_engine().unwrap();
    engine.advance(Some(phase));
    engine
}

/// The reference transition table written out longhand.
fn expected_next(phase: Phase, s: &SensorSnapshot) -> Option<Phase> {
    match phase {
        Phase::S0 if s.north_left => Some(Phase::S4),
        Phase::S0 if s.north_right || s.west_left => Some(Phase::S1),
        Phase::S0 => None,
        Phase::S1 => Some(Phase::S2),
        Phase::S2 => Some(Phase::S3),
        Phase::S3 => Some(Phase::S0),
        Phase::S4 => Some(Phase::S5),
        Phase::S5 if s.west_left => Some(Phase::S7),
        Phase::S5 if s.west_straight || s.east_straight => Some(Phase::S6),
        Phase::S5 => None,
        Phase::S6 => Some(Phase::S0),
        Phase::S7 => Some(Phase::S2),
    }
}

fn count_edges(levels: &[bool]) -> usize {
    levels
        .windows(2)
        .filter(|pair| !pair[0] && pair[1])
        .count()
}

proptest! {
    #[test]
    fn every_phase_has_a_rule_and_an_output(phase in arbitrary_phase()) {
        let engine = reference_engine().unwrap();
        prop_assert!(engine.rule(phase).is_some());
        prop_assert_eq!(
            engine.output(phase).map(|o| o.bits().len()),
            Some(LampOutputs::WIDTH)
        );
    }

    #[test]
    fn transitions_match_the_table(
        phase in arbitrary_phase(),
        snapshot in arbitrary_snapshot(),
    ) {
        let engine = engine_in(phase);
        prop_assert_eq!(
            engine.compute_next_state(&snapshot).unwrap(),
            expected_next(phase, &snapshot)
        );
    }

    #[test]
    fn compute_is_deterministic(
        phase in arbitrary_phase(),
        snapshot in arbitrary_snapshot(),
    ) {
        let engine = engine_in(phase);
        let first = engine.compute_next_state(&snapshot).unwrap();
        let second = engine.compute_next_state(&snapshot).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.current_state(), phase);
    }

    #[test]
    fn no_match_holds_the_state(
        phase in arbitrary_phase(),
        snapshot in arbitrary_snapshot(),
    ) {
        let mut engine = engine_in(phase);
        let next = engine.compute_next_state(&snapshot).unwrap();
        engine.advance(next);

        match next {
            Some(target) => prop_assert_eq!(engine.current_state(), target),
            None => prop_assert_eq!(engine.current_state(), phase),
        }
    }

    #[test]
    fn dwell_phases_ignore_inputs(
        phase in prop::sample::select(vec![
            Phase::S1, Phase::S2, Phase::S3, Phase::S4, Phase::S6, Phase::S7,
        ]),
        a in arbitrary_snapshot(),
        b in arbitrary_snapshot(),
    ) {
        let engine = engine_in(phase);
        let next = engine.compute_next_state(&a).unwrap();
        prop_assert!(next.is_some());
        prop_assert_eq!(next, engine.compute_next_state(&b).unwrap());
    }

    #[test]
    fn rendering_is_idempotent(phase in arbitrary_phase()) {
        let engine = engine_in(phase);
        let mut renderer =
            OutputRenderer::new::<LampOutputs>(RecordingActuator::new(LampOutputs::WIDTH)).unwrap();

        let first = renderer.render(&engine).unwrap();
        let lamps = renderer.actuator().lamps().to_vec();
        let commands = renderer.actuator().commands().to_vec();
        renderer.actuator_mut().clear_commands();

        let second = renderer.render(&engine).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(renderer.actuator().lamps(), lamps.as_slice());
        prop_assert_eq!(renderer.actuator().commands(), commands.as_slice());
        prop_assert_eq!(lamps, first.bits());
    }

    #[test]
    fn one_cycle_per_edge(levels in prop::collection::vec(any::<bool>(), 0..64)) {
        let engine = reference_engine().unwrap();
        let renderer =
            OutputRenderer::new::<LampOutputs>(RecordingActuator::new(LampOutputs::WIDTH)).unwrap();
        let mut controller = Controller::new(engine, renderer);
        let mut snapshots = 0usize;

        for level in &levels {
            controller
                .poll(*level, || {
                    snapshots += 1;
                    SensorSnapshot::all_detected()
                })
                .unwrap();
        }

        let edges = count_edges(&levels);
        prop_assert_eq!(controller.cycles(), edges as u64);
        prop_assert_eq!(snapshots, edges);
    }

    #[test]
    fn detector_fires_only_on_asserting_transitions(
        levels in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let mut detector = FallingEdgeDetector::new();
        let mut previous = None;

        for level in levels {
            let fired = detector.sample(level);
            prop_assert_eq!(fired, previous == Some(false) && level);
            previous = Some(level);
        }
    }

    #[test]
    fn queue_respects_its_limits(
        arrivals in prop::collection::vec(arbitrary_direction(), 0..32),
        phases in prop::collection::vec(arbitrary_phase(), 0..32),
    ) {
        let mut queue = CarQueue::new();
        for (i, direction) in arrivals.iter().enumerate() {
            let _ = queue.enqueue(*direction);
            if let Some(phase) = phases.get(i) {
                if let Some(passed) = queue.try_pass(*phase) {
                    prop_assert!(phase.permits(passed));
                }
            }

            prop_assert!(queue.len() <= queue.capacity());
            for direction in Direction::ALL {
                prop_assert!(queue.count(direction) <= 2);
                prop_assert_eq!(queue.snapshot().get(direction), queue.count(direction) > 0);
            }
        }
    }
}
