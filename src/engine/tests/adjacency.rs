use crate::aircraft::SizeClass;
use crate::engine::compute;
use crate::engine::tests::utils::{add_aircraft, add_rule, add_stand, id, two_stand_input};
use crate::error::{EngineError, Reason};
use crate::input::CoreInput;
use crate::stand::{Direction, Restriction};
use std::collections::BTreeMap;
use std::sync::Arc;

fn counts(pairs: &[(&str, u32)]) -> BTreeMap<Arc<str>, u32> {
    pairs.iter().map(|(k, v)| (id(k), *v)).collect()
}

/// Two code-F stands and one code-C stand, all with derived compatibility.
fn apron() -> CoreInput {
    let mut input = two_stand_input(1);
    input.aircraft_types.clear();
    input.stands.clear();
    add_aircraft(&mut input.aircraft_types, "A320", SizeClass::C, 45);
    add_aircraft(&mut input.aircraft_types, "B77W", SizeClass::E, 90);
    add_aircraft(&mut input.aircraft_types, "A388", SizeClass::F, 120);
    add_stand(&mut input.stands, "W1", SizeClass::F, &[]);
    add_stand(&mut input.stands, "W2", SizeClass::F, &[]);
    add_stand(&mut input.stands, "N1", SizeClass::C, &[]);
    input
}

fn invalid(input: &CoreInput) -> Vec<Reason> {
    match compute(input) {
        Err(EngineError::InvalidConfig(issues)) => issues.into_iter().map(|i| i.reason).collect(),
        other => panic!("expected invalid config, got {:?}", other.map(|o| o.per_day.len())),
    }
}

#[test]
fn test_restrictions_apply_only_in_worst_case() {
    let mut input = apron();
    add_rule(
        &mut input.adjacency_rules,
        "W1",
        "W2",
        Restriction::SizeLimited { max_size: SizeClass::E },
        Direction::AToB,
    );
    add_rule(
        &mut input.adjacency_rules,
        "N1",
        "W1",
        Restriction::TypeLimited { prohibited_types: vec![id("B77W")] },
        Direction::AToB,
    );
    let output = compute(&input).unwrap();

    let slot = &output.gross.slots[0];
    assert_eq!(counts(&[("A320", 3), ("A388", 2), ("B77W", 2)]), slot.best_case);
    assert_eq!(counts(&[("A320", 3), ("A388", 1), ("B77W", 1)]), slot.worst_case);
    assert_eq!(counts(&[("A320", 1)]), slot.stands["N1"]);
}

#[test]
fn test_no_use_zeroes_stand_in_worst_case() {
    let mut input = apron();
    add_rule(
        &mut input.adjacency_rules,
        "W1",
        "W2",
        Restriction::SizeLimited { max_size: SizeClass::E },
        Direction::AToB,
    );
    add_rule(&mut input.adjacency_rules, "W2", "N1", Restriction::NoUse, Direction::Both);
    let output = compute(&input).unwrap();

    for slot in &output.gross.slots {
        assert_eq!(counts(&[("A320", 1), ("A388", 1), ("B77W", 1)]), slot.worst_case);
    }
    assert_eq!(16 * 3, output.gross.worst_case.total);
    assert_eq!(16 * 7, output.gross.best_case.total);
}

#[test]
fn test_worst_case_never_exceeds_best_case() {
    let mut input = apron();
    add_rule(&mut input.adjacency_rules, "W1", "W2", Restriction::NoUse, Direction::BToA);
    add_rule(
        &mut input.adjacency_rules,
        "N1",
        "W2",
        Restriction::SizeLimited { max_size: SizeClass::A },
        Direction::AToB,
    );
    let output = compute(&input).unwrap();

    for slot in &output.gross.slots {
        for (t, worst) in &slot.worst_case {
            assert!(*worst <= slot.best_case[t]);
        }
    }
    assert!(output.gross.worst_case.total <= output.gross.best_case.total);
}

#[test]
fn test_maintenance_is_measured_against_best_case() {
    let mut input = two_stand_input(1);
    add_rule(&mut input.adjacency_rules, "A1", "B1", Restriction::NoUse, Direction::AToB);
    let output = compute(&input).unwrap();
    assert_eq!(output.gross.best_case, output.per_day[0].original_capacity);
}

#[test]
fn test_invalid_rules_are_rejected() {
    let mut input = apron();
    add_rule(&mut input.adjacency_rules, "W1", "W9", Restriction::NoUse, Direction::AToB);
    add_rule(&mut input.adjacency_rules, "N1", "N1", Restriction::NoUse, Direction::AToB);
    add_rule(&mut input.adjacency_rules, "W1", "W2", Restriction::NoUse, Direction::Both);
    add_rule(&mut input.adjacency_rules, "W2", "W1", Restriction::NoUse, Direction::Both);
    assert_eq!(
        vec![
            Reason::UnknownStand { id: id("W9") },
            Reason::SelfAdjacency,
            Reason::DuplicateAdjacencyRule { first: 2 },
        ],
        invalid(&input)
    );
}
