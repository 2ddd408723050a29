use crate::capacity::{GrossCapacity, slot_contribution};
use crate::catalog::Catalog;
use crate::input::{OperationalSettings, ReductionMode};
use crate::maintenance::{Classification, MaintenanceRequest, StatusPartition};
use crate::report::{ContributingRequest, DayReduction};
use crate::time::{TimeSlot, day_window, overlaps, overlaps_half_open};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Read-only state shared by every day of the horizon.
pub struct ImpactContext<'a> {
    pub catalog: &'a Catalog,
    pub slots: &'a [TimeSlot],
    pub gross: &'a GrossCapacity,
    pub settings: &'a OperationalSettings,
    pub partition: &'a StatusPartition,
    /// Ordered by (stand, id).
    pub maintenance: &'a [MaintenanceRequest],
}

pub struct DayImpact {
    pub net: Vec<Vec<u32>>,
    pub definite: DayReduction,
    pub potential: DayReduction,
}

impl ImpactContext<'_> {
    pub fn apply_day(&self, date: NaiveDate) -> DayImpact {
        let (day_start, day_end) = day_window(date);
        let requests = self
            .maintenance
            .iter()
            .filter(|m| overlaps(m.start, m.end, day_start, day_end))
            .collect::<Vec<_>>();

        let mut net = self.gross.best().to_vec();
        let mut definite = DayReduction::default();
        let mut potential = DayReduction::default();
        let mut contributing = [BTreeSet::new(), BTreeSet::new()];

        for (i, slot) in self.slots.iter().enumerate() {
            let (slot_start, slot_end) = slot.on(date);
            for (k, m) in requests
                .iter()
                .enumerate()
                .filter(|(_, m)| overlaps_half_open(m.start, m.end, slot_start, slot_end))
            {
                let Some(stand) = self.catalog.stand_idx(&m.stand_id) else {
                    warn!(maintenance = %m.id, stand = %m.stand_id, "maintenance on unknown stand skipped");
                    continue;
                };
                let Some(classification) = self.partition.classify(m.status) else {
                    continue;
                };

                for t in self.catalog.compatible_types(stand) {
                    if self.gross.contributors(i, t).binary_search(&stand).is_err() {
                        continue;
                    }
                    let single = slot_contribution(
                        slot.duration(),
                        self.catalog.aircraft()[t].turnaround_minutes,
                        self.settings.gap_between_flights_minutes,
                    );
                    let removable = match self.settings.maintenance_reduction {
                        ReductionMode::SingleUnit => 1,
                        ReductionMode::StandSlot => single,
                    };
                    let reduction = net[i][t].min(removable);
                    if reduction == 0 {
                        continue;
                    }
                    net[i][t] -= reduction;

                    let body = self.catalog.body_of(t);
                    match classification {
                        Classification::Definite => {
                            definite.totals.add(body, reduction);
                            contributing[0].insert(k);
                        }
                        Classification::Potential => {
                            potential.totals.add(body, reduction);
                            contributing[1].insert(k);
                        }
                    }
                }
            }
        }

        let [definite_ids, potential_ids] = contributing;
        definite.requests = definite_ids
            .into_iter()
            .map(|k| ContributingRequest::from(requests[k]))
            .collect();
        potential.requests = potential_ids
            .into_iter()
            .map(|k| ContributingRequest::from(requests[k]))
            .collect();

        self.assert_invariants(&net);
        debug!(
            %date,
            requests = requests.len(),
            definite = definite.totals.total,
            potential = potential.totals.total,
            "maintenance impact applied"
        );
        DayImpact {
            net,
            definite,
            potential,
        }
    }

    fn assert_invariants(&self, net: &[Vec<u32>]) {
        debug_assert!(
            net.iter()
                .zip(self.gross.best())
                .all(|(n, g)| n.iter().zip(g).all(|(n, g)| n <= g)),
            "net capacity exceeds gross capacity"
        );
    }
}
