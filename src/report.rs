use crate::adjacency::Scenario;
use crate::aircraft::{AircraftTypeId, BodyType};
use crate::capacity::GrossCapacity;
use crate::catalog::Catalog;
use crate::error::Warning;
use crate::maintenance::{Classification, MaintenanceId, MaintenanceRequest, MaintenanceStatus};
use crate::stand::StandId;
use crate::time::TimeSlot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabled::Tabled;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyTotals {
    pub narrow: u32,
    pub wide: u32,
    pub total: u32,
}

impl BodyTotals {
    pub fn add(&mut self, body: BodyType, count: u32) {
        match body {
            BodyType::Narrow => self.narrow += count,
            BodyType::Wide => self.wide += count,
        }
        self.total += count;
    }

    pub fn get(&self, body: BodyType) -> u32 {
        match body {
            BodyType::Narrow => self.narrow,
            BodyType::Wide => self.wide,
        }
    }

    pub fn minus(&self, other: &BodyTotals) -> BodyTotals {
        let narrow = self.narrow.saturating_sub(other.narrow);
        let wide = self.wide.saturating_sub(other.wide);
        BodyTotals {
            narrow,
            wide,
            total: narrow + wide,
        }
    }

    /// Sums a `[slot][type]` matrix by body type.
    pub fn of(catalog: &Catalog, matrix: &[Vec<u32>]) -> BodyTotals {
        let mut totals = BodyTotals::default();
        matrix.iter().for_each(|row| {
            row.iter()
                .enumerate()
                .for_each(|(t, count)| totals.add(catalog.body_of(t), *count))
        });
        totals
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct ContributingRequest {
    pub id: MaintenanceId,
    pub stand_id: StandId,
    pub title: String,
    pub status: MaintenanceStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&MaintenanceRequest> for ContributingRequest {
    fn from(m: &MaintenanceRequest) -> Self {
        ContributingRequest {
            id: m.id.clone(),
            stand_id: m.stand_id.clone(),
            title: m.title.clone(),
            status: m.status,
            start: m.start,
            end: m.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionRecord {
    pub classification: Classification,
    pub reduction: BodyTotals,
    /// Requests that removed capacity on this day, ordered by (stand, id).
    pub contributing: Vec<ContributingRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotNet {
    pub label: String,
    pub net: BTreeMap<AircraftTypeId, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyImpactReport {
    pub date: NaiveDate,
    pub original_capacity: BodyTotals,
    pub capacity_after_definite: BodyTotals,
    pub final_net_capacity: BodyTotals,
    pub definite: ReductionRecord,
    pub potential: ReductionRecord,
    /// Net capacity per slot after both reductions.
    pub slots: Vec<SlotNet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCapacity {
    pub label: String,
    pub best_case: BTreeMap<AircraftTypeId, u32>,
    pub worst_case: BTreeMap<AircraftTypeId, u32>,
    /// Best-case contribution of each active stand.
    pub stands: BTreeMap<StandId, BTreeMap<AircraftTypeId, u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossReport {
    pub best_case: BodyTotals,
    pub worst_case: BodyTotals,
    pub slots: Vec<SlotCapacity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreOutput {
    pub per_day: Vec<DailyImpactReport>,
    pub slots_used: Vec<TimeSlot>,
    pub gross: GrossReport,
    pub warnings: Vec<Warning>,
}

/// Non-zero entries of a type-indexed vector keyed by aircraft id.
fn by_type(catalog: &Catalog, row: &[u32]) -> BTreeMap<AircraftTypeId, u32> {
    row.iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(t, count)| (catalog.aircraft()[t].id.clone(), *count))
        .collect()
}

impl GrossReport {
    pub fn assemble(catalog: &Catalog, slots: &[TimeSlot], gross: &GrossCapacity) -> GrossReport {
        let slots = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| SlotCapacity {
                label: slot.label.clone(),
                best_case: by_type(catalog, &gross.best()[i]),
                worst_case: by_type(catalog, &gross.worst()[i]),
                stands: catalog
                    .stands()
                    .iter()
                    .enumerate()
                    .filter(|(s, _)| catalog.is_active(*s))
                    .map(|(s, stand)| (stand.id.clone(), by_type(catalog, gross.stand(i, s))))
                    .collect(),
            })
            .collect();
        GrossReport {
            best_case: BodyTotals::of(catalog, gross.scenario(Scenario::BestCase)),
            worst_case: BodyTotals::of(catalog, gross.scenario(Scenario::WorstCase)),
            slots,
        }
    }
}

/// Reduction accumulated for one classification over one day.
#[derive(Debug, Clone, Default)]
pub struct DayReduction {
    pub totals: BodyTotals,
    pub requests: Vec<ContributingRequest>,
}

impl DailyImpactReport {
    pub fn assemble(
        date: NaiveDate,
        catalog: &Catalog,
        slots: &[TimeSlot],
        gross: &GrossCapacity,
        net: &[Vec<u32>],
        definite: DayReduction,
        potential: DayReduction,
    ) -> DailyImpactReport {
        let original_capacity = BodyTotals::of(catalog, gross.best());
        let capacity_after_definite = original_capacity.minus(&definite.totals);
        let final_net_capacity = capacity_after_definite.minus(&potential.totals);
        DailyImpactReport {
            date,
            original_capacity,
            capacity_after_definite,
            final_net_capacity,
            definite: ReductionRecord {
                classification: Classification::Definite,
                reduction: definite.totals,
                contributing: definite.requests,
            },
            potential: ReductionRecord {
                classification: Classification::Potential,
                reduction: potential.totals,
                contributing: potential.requests,
            },
            slots: slots
                .iter()
                .zip(net)
                .map(|(slot, row)| SlotNet {
                    label: slot.label.clone(),
                    net: by_type(catalog, row),
                })
                .collect(),
        }
    }
}
