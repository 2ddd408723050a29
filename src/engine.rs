use crate::capacity::GrossCapacity;
use crate::error::{EngineError, EngineResult};
use crate::input::CoreInput;
use crate::report::{CoreOutput, DailyImpactReport, GrossReport};
use crate::validate::validate;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

mod impact;

#[cfg(test)]
mod tests;

pub use impact::{DayImpact, ImpactContext};

/// Runs the whole pipeline for `input`: validation, gross capacity for both
/// scenarios, then the maintenance impact of every day in the horizon.
pub fn compute(input: &CoreInput) -> EngineResult<CoreOutput> {
    compute_cancellable(input, &AtomicBool::new(false))
}

/// Like [`compute`], but stops with [`EngineError::Cancelled`] once `stop_flag` is set.
/// The flag is checked before each day.
pub fn compute_cancellable(input: &CoreInput, stop_flag: &AtomicBool) -> EngineResult<CoreOutput> {
    let validated = validate(input)?;
    info!(
        stands = validated.catalog.stands().len(),
        aircraft_types = validated.catalog.aircraft().len(),
        slots = validated.slots.len(),
        maintenance = validated.maintenance.len(),
        "computing stand capacity"
    );

    let gross = GrossCapacity::aggregate(
        &validated.catalog,
        &validated.resolver,
        &validated.slots,
        input.settings.gap_between_flights_minutes,
    );
    let context = ImpactContext {
        catalog: &validated.catalog,
        slots: &validated.slots,
        gross: &gross,
        settings: &input.settings,
        partition: &input.status_partition,
        maintenance: &validated.maintenance,
    };

    let mut per_day = vec![];
    for (completed_days, date) in input.horizon.days().enumerate() {
        if stop_flag.load(Ordering::Relaxed) {
            info!(completed_days, "computation cancelled");
            return Err(EngineError::Cancelled { completed_days });
        }
        let DayImpact {
            net,
            definite,
            potential,
        } = context.apply_day(date);
        per_day.push(DailyImpactReport::assemble(
            date,
            &validated.catalog,
            &validated.slots,
            &gross,
            &net,
            definite,
            potential,
        ));
    }

    let gross_report = GrossReport::assemble(&validated.catalog, &validated.slots, &gross);
    info!(days = per_day.len(), warnings = validated.warnings.len(), "stand capacity computed");
    Ok(CoreOutput {
        per_day,
        slots_used: validated.slots,
        gross: gross_report,
        warnings: validated.warnings,
    })
}
