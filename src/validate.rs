use crate::adjacency::AdjacencyResolver;
use crate::catalog::Catalog;
use crate::error::{ConfigIssue, EngineError, EngineResult, Reason, Warning};
use crate::input::CoreInput;
use crate::maintenance::MaintenanceRequest;
use crate::stand::Restriction;
use crate::time::{combine, generate_slots, overlaps, Time, TimeSlot, MINUTES_PER_DAY};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Canonical, index-backed form of a `CoreInput` that passed validation.
pub struct ValidatedInput {
    pub catalog: Catalog,
    pub resolver: AdjacencyResolver,
    pub slots: Vec<TimeSlot>,
    /// Usable requests ordered by (stand, id).
    pub maintenance: Vec<MaintenanceRequest>,
    pub warnings: Vec<Warning>,
}

pub fn validate(input: &CoreInput) -> EngineResult<ValidatedInput> {
    let issues = structural_issues(input);
    if !issues.is_empty() {
        return Err(EngineError::InvalidConfig(issues));
    }

    let mut overrides = input
        .aircraft_types
        .iter()
        .filter(|a| a.overrides_body())
        .map(|a| a.id.clone())
        .collect::<Vec<_>>();
    overrides.sort();
    let mut warnings = overrides
        .into_iter()
        .map(|id| Warning::BodyTypeOverride { id })
        .collect::<Vec<_>>();

    let catalog = Catalog::new(input.aircraft_types.clone(), input.stands.clone(), &mut warnings);
    let resolver = AdjacencyResolver::new(&catalog, &input.adjacency_rules);
    let settings = &input.settings;
    let slots = generate_slots(
        settings.operating_window.start,
        settings.operating_window.end,
        settings.slot_duration_minutes,
        settings.include_partial_slot,
    );
    let maintenance = usable_maintenance(input, &catalog, &mut warnings);

    warnings.iter().for_each(|w| warn!(warning = %w, "input dropped or overridden"));

    Ok(ValidatedInput {
        catalog,
        resolver,
        slots,
        maintenance,
        warnings,
    })
}

fn structural_issues(input: &CoreInput) -> Vec<ConfigIssue> {
    let mut issues = vec![];

    if input.horizon.start_date > input.horizon.end_date {
        issues.push(ConfigIssue::new("horizon", Reason::InvertedHorizon));
    }

    let settings = &input.settings;
    if settings.slot_duration_minutes == 0 {
        issues.push(ConfigIssue::new("settings.slot_duration_minutes", Reason::NonPositiveSlotDuration));
    }
    if settings.operating_window.end <= settings.operating_window.start {
        issues.push(ConfigIssue::new("settings.operating_window", Reason::InvertedWindow));
    }

    let mut aircraft_ids = HashSet::new();
    for (i, a) in input.aircraft_types.iter().enumerate() {
        if !aircraft_ids.insert(a.id.clone()) {
            issues.push(ConfigIssue::new(
                format!("aircraft_types[{}].id", i),
                Reason::DuplicateId { id: a.id.to_string() },
            ));
        }
        if a.turnaround_minutes == 0 {
            issues.push(ConfigIssue::new(
                format!("aircraft_types[{}].turnaround_minutes", i),
                Reason::NonPositiveTurnaround,
            ));
        }
    }

    let mut stand_ids = HashSet::new();
    for (i, s) in input.stands.iter().enumerate() {
        if !stand_ids.insert(s.id.clone()) {
            issues.push(ConfigIssue::new(
                format!("stands[{}].id", i),
                Reason::DuplicateId { id: s.id.to_string() },
            ));
        }
    }

    let mut seen_rules = HashMap::new();
    for (i, rule) in input.adjacency_rules.iter().enumerate() {
        for (field, id) in [("stand_a", &rule.stand_a), ("stand_b", &rule.stand_b)] {
            if !stand_ids.contains(id) {
                issues.push(ConfigIssue::new(
                    format!("adjacency_rules[{}].{}", i, field),
                    Reason::UnknownStand { id: id.clone() },
                ));
            }
        }
        if rule.stand_a == rule.stand_b {
            issues.push(ConfigIssue::new(format!("adjacency_rules[{}]", i), Reason::SelfAdjacency));
        }
        if let Restriction::TypeLimited { prohibited_types } = &rule.restriction {
            prohibited_types
                .iter()
                .enumerate()
                .filter(|(_, id)| !aircraft_ids.contains(*id))
                .for_each(|(j, id)| {
                    issues.push(ConfigIssue::new(
                        format!("adjacency_rules[{}].restriction.prohibited_types[{}]", i, j),
                        Reason::UnknownAircraftType { id: id.clone() },
                    ))
                });
        }
        match seen_rules.entry(rule.canonical_key()) {
            Entry::Occupied(first) => issues.push(ConfigIssue::new(
                format!("adjacency_rules[{}]", i),
                Reason::DuplicateAdjacencyRule { first: *first.get() },
            )),
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
        }
    }

    input.status_partition.conflicts().for_each(|status| {
        issues.push(ConfigIssue::new("status_partition", Reason::AmbiguousStatus { status: *status }))
    });

    for (i, m) in input.maintenance.iter().enumerate() {
        if m.end < m.start {
            issues.push(ConfigIssue::new(format!("maintenance[{}]", i), Reason::NegativeDuration));
        }
    }

    issues
}

fn usable_maintenance(input: &CoreInput, catalog: &Catalog, warnings: &mut Vec<Warning>) -> Vec<MaintenanceRequest> {
    let horizon_start = combine(input.horizon.start_date, Time(0));
    let horizon_end = combine(input.horizon.end_date, Time(MINUTES_PER_DAY));
    let mut seen = HashSet::new();

    let mut usable = vec![];
    for m in &input.maintenance {
        let dropped = if !seen.insert(m.id.clone()) {
            Some(Warning::DuplicateMaintenance { id: m.id.clone() })
        } else if catalog.stand_idx(&m.stand_id).is_none() {
            Some(Warning::UnknownStandInMaintenance {
                id: m.id.clone(),
                stand: m.stand_id.clone(),
            })
        } else if input.status_partition.classify(m.status).is_none() {
            Some(Warning::StatusNotPartitioned {
                id: m.id.clone(),
                status: m.status,
            })
        } else if !overlaps(m.start, m.end, horizon_start, horizon_end) {
            Some(Warning::MaintenanceOutsideHorizon { id: m.id.clone() })
        } else {
            None
        };
        match dropped {
            Some(warning) => warnings.push(warning),
            None => usable.push(m.clone()),
        }
    }

    usable.sort_by(|a, b| a.stand_id.cmp(&b.stand_id).then_with(|| a.id.cmp(&b.id)));
    usable
}
