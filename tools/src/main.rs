//! filter-runner: headless exerciser for the NetDesk filter core.
//!
//! Usage:
//!   filter-runner --seed 42 --count 200 --search amina
//!   filter-runner --seed 42 --count 200 --config filters.json
//!   filter-runner --presets presets.json --preset overdue --count 500
//!
//! Generates a deterministic sample population, applies the filter
//! configuration, and prints the surviving records plus a summary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use netdesk_core::{
    aggregator, classifier, sample_data::SampleGenerator, CurrencyFormatter, CustomerRecord,
    FilterConfiguration, PresetLibrary,
};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let count = parse_arg(&args, "--count", 100usize);
    let search = str_arg(&args, "--search").unwrap_or_default();
    let currency = str_arg(&args, "--currency").unwrap_or_else(|| "KES".to_string());
    let base_date = str_arg(&args, "--base-date").unwrap_or_else(|| "2024-06-01".to_string());
    let limit = parse_arg(&args, "--limit", 25usize);

    let base_date: NaiveDate = base_date
        .parse()
        .with_context(|| format!("--base-date '{base_date}' is not a valid ISO date"))?;

    let mut config = match str_arg(&args, "--config") {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading filter config {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("parsing filter config {path}"))?
        }
        None => FilterConfiguration::neutral(),
    };

    if let Some(name) = str_arg(&args, "--preset") {
        let path = str_arg(&args, "--presets")
            .context("--preset requires --presets <file> with the preset library")?;
        let json =
            fs::read_to_string(&path).with_context(|| format!("reading preset library {path}"))?;
        let library = PresetLibrary::from_json(&json)?;
        config = library.apply(&name, &config)?;
        log::info!("applied preset '{name}' from {path}");
    }

    println!("NetDesk — filter-runner");
    println!("  seed:       {seed}");
    println!("  count:      {count}");
    println!("  base date:  {base_date}");
    println!("  search:     {search:?}");
    println!("  clauses:    {} active", config.active_clause_count());
    println!();

    let records = SampleGenerator::new(seed, base_date).generate(count);
    let survivors = aggregator::apply(&records, &config, &search);

    let formatter = CurrencyFormatter::new(currency);
    print_table(&survivors, &formatter, limit);

    println!();
    println!(
        "{} of {} records match ({} filter clauses active)",
        survivors.len(),
        records.len(),
        config.active_clause_count()
    );

    Ok(())
}

fn print_table(records: &[CustomerRecord], formatter: &CurrencyFormatter, limit: usize) {
    println!(
        "{:>4}  {:<28} {:<10} {:<10} {:>16} {:<18} {:<9}",
        "id", "name", "status", "type", "balance", "plan", "quality"
    );
    for record in records.iter().take(limit) {
        let view = record.normalized();
        let quality = classifier::QualityTier::from_score(view.connection_quality);
        println!(
            "{:>4}  {:<28} {:<10} {:<10} {:>16} {:<18} {:<9}",
            record.id,
            record.name,
            status_label(record),
            type_label(record),
            formatter.format(view.balance),
            view.plan,
            quality.label()
        );
    }
    if records.len() > limit {
        println!("  ... {} more (raise --limit to show)", records.len() - limit);
    }
}

fn status_label(record: &CustomerRecord) -> &'static str {
    use netdesk_core::CustomerStatus::*;
    match record.status {
        Active => "active",
        Suspended => "suspended",
        Inactive => "inactive",
    }
}

fn type_label(record: &CustomerRecord) -> &'static str {
    use netdesk_core::CustomerType::*;
    match record.customer_type {
        Individual => "individual",
        Company => "company",
        School => "school",
    }
}

/// Parse `--flag value` into T, falling back to a default.
fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
