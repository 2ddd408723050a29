use crate::adjacency::{AdjacencyResolver, Capability, Scenario};
use crate::catalog::{Catalog, StandIdx, TypeIdx};
use crate::time::TimeSlot;
use tracing::debug;

/// Aircraft of one type a single stand serves within `slot_minutes`. At least one
/// aircraft always fits when the type is allowed at all.
pub fn slot_contribution(slot_minutes: u32, turnaround_minutes: u32, gap_minutes: u32) -> u32 {
    let occupation = turnaround_minutes.saturating_add(gap_minutes).max(1);
    (slot_minutes / occupation).max(1)
}

/// Capacity vector of one stand for one slot, indexed by aircraft type.
pub fn stand_slot_capacity(
    catalog: &Catalog,
    capability: &Capability,
    stand: StandIdx,
    slot: &TimeSlot,
    gap_minutes: u32,
) -> Vec<u32> {
    let mut capacity = vec![0; catalog.aircraft().len()];
    catalog
        .compatible_types(stand)
        .filter(|t| capability.allows(*t, catalog.aircraft()[*t].size))
        .for_each(|t| {
            capacity[t] = slot_contribution(slot.duration(), catalog.aircraft()[t].turnaround_minutes, gap_minutes)
        });
    capacity
}

/// Capacity summed over all stands, per scenario, slot and aircraft type. Slots are
/// shared by every day of the horizon so this is computed once.
#[derive(Debug, Clone)]
pub struct GrossCapacity {
    best: Vec<Vec<u32>>,
    worst: Vec<Vec<u32>>,
    stands: Vec<Vec<Vec<u32>>>,
    contributors: Vec<Vec<Vec<StandIdx>>>,
}

impl GrossCapacity {
    pub fn aggregate(catalog: &Catalog, resolver: &AdjacencyResolver, slots: &[TimeSlot], gap_minutes: u32) -> GrossCapacity {
        let types = catalog.aircraft().len();
        let active = (0..catalog.stands().len())
            .filter(|s| catalog.is_active(*s))
            .collect::<Vec<StandIdx>>();
        let capabilities = Scenario::ALL.map(|scenario| {
            active
                .iter()
                .map(|s| resolver.capability(*s, scenario))
                .collect::<Vec<_>>()
        });

        let mut best = vec![vec![0; types]; slots.len()];
        let mut worst = vec![vec![0; types]; slots.len()];
        let mut stands = vec![vec![vec![]; catalog.stands().len()]; slots.len()];
        let mut contributors = vec![vec![vec![]; types]; slots.len()];

        for (i, slot) in slots.iter().enumerate() {
            for (k, stand) in active.iter().enumerate() {
                let b = stand_slot_capacity(catalog, &capabilities[0][k], *stand, slot, gap_minutes);
                let w = stand_slot_capacity(catalog, &capabilities[1][k], *stand, slot, gap_minutes);
                for t in 0..types {
                    best[i][t] += b[t];
                    worst[i][t] += w[t];
                    if b[t] > 0 {
                        contributors[i][t].push(*stand);
                    }
                }
                stands[i][*stand] = b;
            }
        }

        debug!(
            slots = slots.len(),
            stands = active.len(),
            best = best.iter().flatten().sum::<u32>(),
            worst = worst.iter().flatten().sum::<u32>(),
            "gross capacity aggregated"
        );
        GrossCapacity {
            best,
            worst,
            stands,
            contributors,
        }
    }

    pub fn scenario(&self, scenario: Scenario) -> &[Vec<u32>] {
        match scenario {
            Scenario::BestCase => &self.best,
            Scenario::WorstCase => &self.worst,
        }
    }

    pub fn best(&self) -> &[Vec<u32>] {
        &self.best
    }

    pub fn worst(&self) -> &[Vec<u32>] {
        &self.worst
    }

    /// Best-case vector of one stand in one slot; empty for inactive stands.
    pub fn stand(&self, slot: usize, stand: StandIdx) -> &[u32] {
        &self.stands[slot][stand]
    }

    /// Stands contributing type `t` to `slot` in the best case, ascending.
    pub fn contributors(&self, slot: usize, t: TypeIdx) -> &[StandIdx] {
        &self.contributors[slot][t]
    }

    pub fn total(&self, scenario: Scenario) -> u32 {
        self.scenario(scenario).iter().flatten().sum()
    }
}
