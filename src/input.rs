use crate::aircraft::AircraftType;
use crate::maintenance::{MaintenanceRequest, StatusPartition};
use crate::stand::{AdjacencyRule, Stand};
use crate::time::Time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Horizon {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    pub start: Time,
    pub end: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalSettings {
    pub slot_duration_minutes: u32,
    #[serde(default)]
    pub gap_between_flights_minutes: u32,
    pub operating_window: OperatingWindow,
    /// Emit the shorter trailing slot when the window is not a multiple of the slot size.
    #[serde(default)]
    pub include_partial_slot: bool,
    #[serde(default)]
    pub maintenance_reduction: ReductionMode,
}

/// Capacity one maintenance request removes per aircraft type and slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// One aircraft, however many the stand could turn in the slot.
    #[default]
    SingleUnit,
    /// Everything the stand contributes to the slot.
    StandSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreInput {
    pub horizon: Horizon,
    pub settings: OperationalSettings,
    pub aircraft_types: Vec<AircraftType>,
    pub stands: Vec<Stand>,
    #[serde(default)]
    pub adjacency_rules: Vec<AdjacencyRule>,
    #[serde(default)]
    pub maintenance: Vec<MaintenanceRequest>,
    #[serde(default)]
    pub status_partition: StatusPartition,
}

impl CoreInput {
    pub fn load_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let input: CoreInput = serde_json::from_str(&data)?;
        Ok(input)
    }
}
