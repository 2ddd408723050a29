use crate::aircraft::{AircraftType, SizeClass};
use crate::input::{CoreInput, Horizon, OperatingWindow, OperationalSettings, ReductionMode};
use crate::maintenance::{MaintenanceRequest, MaintenanceStatus, StatusPartition};
use crate::stand::{AdjacencyRule, Direction, Restriction, Stand};
use crate::time::Time;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::BTreeSet;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

/// Day `day` of May 2024.
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, minute, 0).unwrap()
}

pub fn settings(slot: u32, gap: u32, from: &str, to: &str) -> OperationalSettings {
    OperationalSettings {
        slot_duration_minutes: slot,
        gap_between_flights_minutes: gap,
        operating_window: OperatingWindow {
            start: from.parse::<Time>().unwrap(),
            end: to.parse::<Time>().unwrap(),
        },
        include_partial_slot: false,
        maintenance_reduction: ReductionMode::SingleUnit,
    }
}

pub fn partition() -> StatusPartition {
    StatusPartition {
        definite: BTreeSet::from([MaintenanceStatus::Approved, MaintenanceStatus::InProgress]),
        potential: BTreeSet::from([MaintenanceStatus::Requested]),
    }
}

pub fn add_aircraft(aircraft: &mut Vec<AircraftType>, aircraft_id: &str, size: SizeClass, turnaround: u32) {
    aircraft.push(AircraftType {
        id: id(aircraft_id),
        size,
        turnaround_minutes: turnaround,
        body_type: None,
    });
}

pub fn add_stand(stands: &mut Vec<Stand>, stand_id: &str, max_size: SizeClass, compatible: &[&str]) {
    stands.push(Stand {
        id: id(stand_id),
        max_size,
        compatible: compatible.iter().map(|c| id(c)).collect(),
    });
}

pub fn add_rule(rules: &mut Vec<AdjacencyRule>, a: &str, b: &str, restriction: Restriction, direction: Direction) {
    rules.push(AdjacencyRule {
        stand_a: id(a),
        stand_b: id(b),
        restriction,
        direction,
    });
}

pub fn add_maintenance(
    maintenance: &mut Vec<MaintenanceRequest>,
    maintenance_id: &str,
    stand_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: MaintenanceStatus,
) {
    maintenance.push(MaintenanceRequest {
        id: id(maintenance_id),
        stand_id: id(stand_id),
        title: format!("Works on {}", stand_id),
        start,
        end,
        status,
    });
}

/// A1 (C, A320 turning in 45) and B1 (E, B77W turning in 90), 60 minute slots with a
/// 15 minute gap from 06:00 to 22:00, over `days` days starting 1 May 2024.
pub fn two_stand_input(days: u32) -> CoreInput {
    let mut aircraft_types = vec![];
    let mut stands = vec![];
    add_aircraft(&mut aircraft_types, "A320", SizeClass::C, 45);
    add_aircraft(&mut aircraft_types, "B77W", SizeClass::E, 90);
    add_stand(&mut stands, "A1", SizeClass::C, &["A320"]);
    add_stand(&mut stands, "B1", SizeClass::E, &["B77W"]);

    CoreInput {
        horizon: Horizon {
            start_date: date(1),
            end_date: date(days),
        },
        settings: settings(60, 15, "06:00", "22:00"),
        aircraft_types,
        stands,
        adjacency_rules: vec![],
        maintenance: vec![],
        status_partition: partition(),
    }
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
        Just(Arc::from(format!("{}_4", prefix))),
    ]
}

pub fn arb_size() -> impl Strategy<Value = SizeClass> {
    (0..SizeClass::ALL.len()).prop_map(|i| SizeClass::ALL[i])
}

pub fn arb_status() -> impl Strategy<Value = MaintenanceStatus> {
    prop_oneof![
        Just(MaintenanceStatus::Approved),
        Just(MaintenanceStatus::InProgress),
        Just(MaintenanceStatus::Requested),
        Just(MaintenanceStatus::Rejected),
    ]
}
