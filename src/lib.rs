//! Stand capacity and maintenance impact for an airfield.
//!
//! [`compute`] takes a [`CoreInput`] snapshot of stands, aircraft types, adjacency rules
//! and maintenance requests, and reports per slot how many aircraft can be served in the
//! best and worst adjacency case, and per day how much of that capacity definite and
//! potential maintenance takes away.

pub mod adjacency;
pub mod aircraft;
pub mod capacity;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod maintenance;
pub mod report;
pub mod stand;
pub mod time;
pub mod validate;

pub use adjacency::{AdjacencyResolver, Capability, Scenario};
pub use aircraft::{AircraftType, AircraftTypeId, BodyType, SizeClass};
pub use engine::{compute, compute_cancellable};
pub use error::{ConfigIssue, EngineError, EngineResult, Reason, Warning};
pub use input::{CoreInput, Horizon, OperatingWindow, OperationalSettings, ReductionMode};
pub use maintenance::{Classification, MaintenanceId, MaintenanceRequest, MaintenanceStatus, StatusPartition};
pub use report::{BodyTotals, CoreOutput, DailyImpactReport, GrossReport, ReductionRecord};
pub use stand::{AdjacencyRule, Direction, Restriction, Stand, StandId};
pub use time::{Time, TimeSlot};
