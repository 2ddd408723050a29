use clap::Parser;
use colored::Colorize;
use stand_capacity::report::SlotCapacity;
use stand_capacity::{BodyTotals, CoreInput, CoreOutput, EngineError, compute, logging};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Also print gross capacity per slot for both scenarios
    #[arg(long)]
    slots: bool,
}

#[derive(Tabled)]
struct DayRow {
    date: String,
    original: String,
    definite: String,
    after_definite: String,
    potential: String,
    final_net: String,
}

#[derive(Tabled)]
struct SlotRow {
    slot: String,
    best_case: String,
    worst_case: String,
}

fn totals(t: &BodyTotals) -> String {
    format!("{} (N {} / W {})", t.total, t.narrow, t.wide)
}

fn counts(by_type: &BTreeMap<Arc<str>, u32>) -> String {
    by_type
        .iter()
        .map(|(id, n)| format!("{}:{}", id, n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_table<T: Tabled>(rows: &[T]) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    println!("{}", table);
}

fn print_report(output: &CoreOutput, slots: bool) {
    let gross = &output.gross;
    println!(
        "{} slots per day, gross best case {}, worst case {}",
        output.slots_used.len(),
        totals(&gross.best_case),
        totals(&gross.worst_case)
    );

    if slots {
        let rows = gross
            .slots
            .iter()
            .map(|s: &SlotCapacity| SlotRow {
                slot: s.label.clone(),
                best_case: counts(&s.best_case),
                worst_case: counts(&s.worst_case),
            })
            .collect::<Vec<_>>();
        print_table(&rows);
    }

    let rows = output
        .per_day
        .iter()
        .map(|d| DayRow {
            date: d.date.to_string(),
            original: totals(&d.original_capacity),
            definite: totals(&d.definite.reduction),
            after_definite: totals(&d.capacity_after_definite),
            potential: totals(&d.potential.reduction),
            final_net: totals(&d.final_net_capacity),
        })
        .collect::<Vec<_>>();
    print_table(&rows);

    for day in &output.per_day {
        let requests = day
            .definite
            .contributing
            .iter()
            .chain(&day.potential.contributing)
            .cloned()
            .collect::<Vec<_>>();
        if !requests.is_empty() {
            println!("{}", format!("Maintenance affecting {}", day.date).bold());
            print_table(&requests);
        }
    }

    for warning in &output.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let input = CoreInput::load_from_file(&args.scenario)?;
    match compute(&input) {
        Ok(output) if args.json => println!("{}", serde_json::to_string_pretty(&output)?),
        Ok(output) => {
            println!("Loaded scenario from {}", args.scenario.display());
            print_report(&output, args.slots);
        }
        Err(EngineError::InvalidConfig(issues)) => {
            for issue in &issues {
                eprintln!("{} {}", "invalid:".red().bold(), issue);
            }
            return Err(EngineError::InvalidConfig(issues).into());
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
