use crate::aircraft::AircraftTypeId;
use crate::maintenance::{MaintenanceId, MaintenanceStatus};
use crate::stand::StandId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigIssue>),

    #[error("computation cancelled after {completed_days} day(s)")]
    Cancelled { completed_days: usize },
}

fn join(issues: &[ConfigIssue]) -> String {
    issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; ")
}

impl EngineError {
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            EngineError::InvalidConfig(issues) => issues,
            EngineError::Cancelled { .. } => &[],
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// One structural problem, located by a path into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigIssue {
    pub path: String,
    pub reason: Reason,
}

impl ConfigIssue {
    pub fn new(path: impl Into<String>, reason: Reason) -> ConfigIssue {
        ConfigIssue { path: path.into(), reason }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Reason {
    #[error("unknown stand '{id}'")]
    UnknownStand { id: StandId },
    #[error("unknown aircraft type '{id}'")]
    UnknownAircraftType { id: AircraftTypeId },
    #[error("duplicate id '{id}'")]
    DuplicateId { id: String },
    #[error("turnaround must be positive")]
    NonPositiveTurnaround,
    #[error("slot duration must be positive")]
    NonPositiveSlotDuration,
    #[error("operating window end must be after its start")]
    InvertedWindow,
    #[error("start date is after end date")]
    InvertedHorizon,
    #[error("interval ends before it starts")]
    NegativeDuration,
    #[error("stand is adjacent to itself")]
    SelfAdjacency,
    #[error("duplicates adjacency rule #{first}")]
    DuplicateAdjacencyRule { first: usize },
    #[error("status '{status}' is both definite and potential")]
    AmbiguousStatus { status: MaintenanceStatus },
}

/// Recoverable input anomaly; the offending data was dropped or overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    UnknownStandInMaintenance { id: MaintenanceId, stand: StandId },
    UnknownAircraftInConstraint { id: AircraftTypeId, stand: StandId },
    StatusNotPartitioned { id: MaintenanceId, status: MaintenanceStatus },
    MaintenanceOutsideHorizon { id: MaintenanceId },
    StandWithNoCompatibility { id: StandId },
    BodyTypeOverride { id: AircraftTypeId },
    DuplicateMaintenance { id: MaintenanceId },
    AircraftExceedsStandSize { id: AircraftTypeId, stand: StandId },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownStandInMaintenance { id, stand } => {
                write!(f, "maintenance {} references unknown stand {}", id, stand)
            }
            Warning::UnknownAircraftInConstraint { id, stand } => {
                write!(f, "stand {} lists unknown aircraft type {}", stand, id)
            }
            Warning::StatusNotPartitioned { id, status } => {
                write!(f, "maintenance {} has unpartitioned status {}", id, status)
            }
            Warning::MaintenanceOutsideHorizon { id } => {
                write!(f, "maintenance {} lies outside the horizon", id)
            }
            Warning::StandWithNoCompatibility { id } => {
                write!(f, "stand {} accepts no aircraft type", id)
            }
            Warning::BodyTypeOverride { id } => {
                write!(f, "aircraft type {} overrides its derived body type", id)
            }
            Warning::DuplicateMaintenance { id } => write!(f, "maintenance {} supplied twice", id),
            Warning::AircraftExceedsStandSize { id, stand } => {
                write!(f, "aircraft type {} is larger than stand {} allows", id, stand)
            }
        }
    }
}
