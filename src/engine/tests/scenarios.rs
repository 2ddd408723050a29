use crate::engine::compute;
use crate::engine::tests::utils::{add_maintenance, add_rule, at, date, id, two_stand_input};
use crate::error::{EngineError, Reason};
use crate::input::CoreInput;
use crate::maintenance::MaintenanceStatus::Approved;
use crate::report::BodyTotals;
use crate::stand::{Direction, Restriction};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;

fn counts(pairs: &[(&str, u32)]) -> BTreeMap<std::sync::Arc<str>, u32> {
    pairs.iter().map(|(k, v)| (id(k), *v)).collect()
}

#[test]
fn test_two_stands_without_constraints() {
    let output = compute(&two_stand_input(1)).unwrap();

    assert_eq!(16, output.slots_used.len());
    for slot in &output.gross.slots {
        assert_eq!(counts(&[("A320", 1), ("B77W", 1)]), slot.best_case);
        assert_eq!(slot.best_case, slot.worst_case);
    }
    let expected = BodyTotals { narrow: 16, wide: 16, total: 32 };
    assert_eq!(expected, output.gross.best_case);
    assert_eq!(expected, output.gross.worst_case);

    assert_eq!(1, output.per_day.len());
    let day = &output.per_day[0];
    assert_eq!(date(1), day.date);
    assert_eq!(expected, day.original_capacity);
    assert_eq!(expected, day.capacity_after_definite);
    assert_eq!(expected, day.final_net_capacity);
    assert_eq!(BodyTotals::default(), day.definite.reduction);
    assert_eq!(BodyTotals::default(), day.potential.reduction);
    assert!(day.definite.contributing.is_empty());
    assert!(output.warnings.is_empty());
}

#[test]
fn test_no_use_adjacency_drops_worst_case_stand() {
    let mut input = two_stand_input(1);
    add_rule(&mut input.adjacency_rules, "A1", "B1", Restriction::NoUse, Direction::AToB);
    let output = compute(&input).unwrap();

    assert_eq!(BodyTotals { narrow: 16, wide: 16, total: 32 }, output.gross.best_case);
    assert_eq!(BodyTotals { narrow: 16, wide: 0, total: 16 }, output.gross.worst_case);
    for slot in &output.gross.slots {
        assert_eq!(counts(&[("A320", 1)]), slot.worst_case);
    }
    assert_eq!(32, output.per_day[0].original_capacity.total);
}

#[test]
fn test_partial_day_maintenance_is_definite() {
    let mut input = two_stand_input(1);
    add_maintenance(&mut input.maintenance, "M1", "A1", at(1, 8, 0), at(1, 14, 0), Approved);
    let output = compute(&input).unwrap();
    let day = &output.per_day[0];

    assert_eq!(BodyTotals { narrow: 6, wide: 0, total: 6 }, day.definite.reduction);
    assert_eq!(16, day.original_capacity.narrow);
    assert_eq!(BodyTotals { narrow: 10, wide: 16, total: 26 }, day.capacity_after_definite);
    assert_eq!(day.capacity_after_definite, day.final_net_capacity);
    assert_eq!(BodyTotals::default(), day.potential.reduction);

    assert_eq!(1, day.definite.contributing.len());
    assert_eq!(id("M1"), day.definite.contributing[0].id);
    assert_eq!("Works on A1", day.definite.contributing[0].title);

    let affected = day
        .slots
        .iter()
        .filter(|s| !s.net.contains_key("A320"))
        .map(|s| s.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        vec!["08:00-09:00", "09:00-10:00", "10:00-11:00", "11:00-12:00", "12:00-13:00", "13:00-14:00"],
        affected
    );
}

#[test]
fn test_inverted_horizon_is_rejected() {
    let mut input = two_stand_input(1);
    input.horizon.start_date = date(2);
    match compute(&input) {
        Err(EngineError::InvalidConfig(issues)) => {
            assert_eq!(1, issues.len());
            assert_eq!("horizon", issues[0].path);
            assert_eq!(Reason::InvertedHorizon, issues[0].reason);
        }
        other => panic!("expected invalid config, got {:?}", other.map(|o| o.per_day.len())),
    }
}

#[test]
fn test_extreme_durations_do_not_overflow() {
    let mut input = two_stand_input(1);
    input.settings.slot_duration_minutes = u32::MAX;
    let output = compute(&input).unwrap();
    assert!(output.slots_used.is_empty());
    assert_eq!(BodyTotals::default(), output.per_day[0].original_capacity);

    input.settings.include_partial_slot = true;
    let output = compute(&input).unwrap();
    assert_eq!(1, output.slots_used.len());
    assert_eq!(960, output.slots_used[0].duration());

    let mut input = two_stand_input(1);
    input.settings.gap_between_flights_minutes = u32::MAX;
    input.aircraft_types[0].turnaround_minutes = u32::MAX;
    let output = compute(&input).unwrap();
    assert_eq!(BodyTotals { narrow: 16, wide: 16, total: 32 }, output.gross.best_case);
}

#[test]
fn test_compute_is_deterministic() {
    let mut input = two_stand_input(3);
    add_rule(&mut input.adjacency_rules, "A1", "B1", Restriction::NoUse, Direction::Both);
    add_maintenance(&mut input.maintenance, "M2", "B1", at(2, 21, 0), at(3, 9, 30), Approved);
    add_maintenance(&mut input.maintenance, "M1", "A1", at(1, 8, 0), at(1, 14, 0), Approved);

    let first = compute(&input).unwrap();
    let second = compute(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_days_are_reported_in_order() {
    let output = compute(&two_stand_input(4)).unwrap();
    let dates = output.per_day.iter().map(|d| d.date).collect::<Vec<_>>();
    assert_eq!(vec![date(1), date(2), date(3), date(4)], dates);
}

#[test]
fn test_cancellation_before_first_day() {
    let flag = AtomicBool::new(true);
    match crate::engine::compute_cancellable(&two_stand_input(2), &flag) {
        Err(EngineError::Cancelled { completed_days }) => assert_eq!(0, completed_days),
        other => panic!("expected cancellation, got {:?}", other.map(|o| o.per_day.len())),
    }
}

#[test]
fn test_bundled_scenario_runs() {
    crate::logging::init_test();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/default.json");
    let input = CoreInput::load_from_file(path).unwrap();
    let output = compute(&input).unwrap();

    assert_eq!(input.horizon.days().count(), output.per_day.len());
    for day in &output.per_day {
        assert!(day.final_net_capacity.total <= day.capacity_after_definite.total);
        assert!(day.capacity_after_definite.total <= day.original_capacity.total);
    }
    assert!(output.gross.worst_case.total <= output.gross.best_case.total);
}
