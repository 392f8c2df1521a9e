//! regform-cli — Command-line interface for regform-core
//!
//! This binary exercises the registration-form models from your
//! terminal: it runs the resilient country load sequence, fetches the
//! raw remote list, prints the static fallback table, and checks a date
//! of birth against the current date.
//!
//! Usage examples
//! --------------
//!
//! - Populate the country control (remote, falling back when offline)
//!   $ regform-cli countries
//!
//! - Point at a mirror with a shorter timeout
//!   $ regform-cli --endpoint=https://example.org/v3.1/all --timeout=3 countries
//!
//! - Strict fetch (non-zero exit on any failure)
//!   $ regform-cli fetch
//!
//! - Show the fallback table used when the remote source is unreachable
//!   $ regform-cli fallback
//!
//! - Date-of-birth check
//!   $ regform-cli check-dob 1990-01-31
//!
//! Diagnostics from the failure path are emitted via `tracing`; set
//! RUST_LOG=regform_core=warn (the default) or =debug to see them.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use chrono::Local;
use clap::Parser;
use regform_core::{
    fallback_records, sort_records, CountrySelector, CountrySource, DobField, DobOutcome,
    LoadOutcome, RestCountriesSource,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CliArgs::parse();

    // Build the remote source from the global flags.
    let mut source = match args.endpoint {
        Some(endpoint) => RestCountriesSource::with_endpoint(endpoint),
        None => RestCountriesSource::new(),
    };
    if let Some(secs) = args.timeout {
        source = source.timeout(Duration::from_secs(secs));
    }

    match args.command {
        Commands::Countries => {
            let mut selector = CountrySelector::new();
            let outcome = selector.load_from(&source);
            for entry in selector.entries() {
                println!("{} ({})", entry.label, entry.value);
            }
            if let LoadOutcome::Fallback = outcome {
                eprintln!("(remote source unavailable; showing the fallback list)");
            }
        }

        Commands::Fetch => {
            let mut records = source.fetch()?;
            sort_records(&mut records);
            for record in &records {
                println!("{} ({})", record.name, record.iso2);
            }
            println!("{} countries", records.len());
        }

        Commands::Fallback => {
            for record in fallback_records() {
                println!("{} ({})", record.name, record.iso2);
            }
        }

        Commands::CheckDob { date } => {
            let mut field = DobField::new(Local::now().date_naive());
            match field.set(&date) {
                DobOutcome::Accepted(value) => println!("{value} accepted"),
                DobOutcome::Future { warning } => bail!("{warning}"),
                DobOutcome::Invalid => bail!("not a valid date (expected YYYY-MM-DD): {date}"),
            }
        }
    }

    Ok(())
}
