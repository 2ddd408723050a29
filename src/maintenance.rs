use crate::stand::StandId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

pub type MaintenanceId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Approved,
    InProgress,
    Completed,
    Requested,
    Rejected,
    Cancelled,
    #[serde(other)]
    Other,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MaintenanceStatus::Approved => "approved",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Completed => "completed",
            MaintenanceStatus::Requested => "requested",
            MaintenanceStatus::Rejected => "rejected",
            MaintenanceStatus::Cancelled => "cancelled",
            MaintenanceStatus::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: MaintenanceId,
    pub stand_id: StandId,
    #[serde(default)]
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: MaintenanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Definite,
    Potential,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusPartition {
    #[serde(default)]
    pub definite: BTreeSet<MaintenanceStatus>,
    #[serde(default)]
    pub potential: BTreeSet<MaintenanceStatus>,
}

impl StatusPartition {
    pub fn classify(&self, status: MaintenanceStatus) -> Option<Classification> {
        if self.definite.contains(&status) {
            Some(Classification::Definite)
        } else if self.potential.contains(&status) {
            Some(Classification::Potential)
        } else {
            None
        }
    }

    /// Statuses listed in both halves.
    pub fn conflicts(&self) -> impl Iterator<Item = &MaintenanceStatus> {
        self.definite.intersection(&self.potential)
    }
}
