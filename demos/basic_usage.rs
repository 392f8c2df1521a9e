//! Basic usage example for regform-rs
//!
//! This example demonstrates how to:
//! - Run the resilient country load sequence
//! - Inspect the fallback table
//! - Apply the date-of-birth rule
//! - Drive the MFA toggle

use chrono::Local;
use regform_rs::prelude::*;

fn main() {
    println!("=== regform-rs Basic Usage Example ===\n");

    // Example 1: the country load sequence
    println!("--- Example 1: Load the country list ---");
    let mut selector = CountrySelector::new();
    let outcome = selector.load_from(&RestCountriesSource::new());
    match outcome {
        LoadOutcome::Loaded(n) => println!("Loaded {n} countries from the remote source"),
        LoadOutcome::Fallback => println!("Remote source unavailable; using the fallback list"),
    }
    for entry in selector.entries().iter().take(5) {
        println!("- {} ({})", entry.label, entry.value);
    }
    println!("... and {} more\n", selector.len().saturating_sub(5));

    // Example 2: the fallback table
    println!("--- Example 2: The fallback table ---");
    for record in fallback_records() {
        println!("- {} ({})", record.name, record.iso2);
    }
    println!();

    // Example 3: date of birth
    println!("--- Example 3: Date-of-birth rule ---");
    let today = Local::now().date_naive();
    let mut dob = DobField::new(today);
    println!("Max selectable date: {}", dob.max_date());
    match dob.set("1990-01-31") {
        DobOutcome::Accepted(d) => println!("1990-01-31 accepted ({d})"),
        DobOutcome::Future { warning } => println!("rejected: {warning}"),
        DobOutcome::Invalid => println!("rejected: not a date"),
    }
    println!();

    // Example 4: MFA toggle
    println!("--- Example 4: MFA toggle ---");
    let mut mfa = MfaToggle::new();
    println!("Initial: {} ({})", mfa.status_label(), mfa.hidden_value());
    mfa.toggle();
    println!("After click: {} ({})", mfa.status_label(), mfa.hidden_value());
    mfa.toggle();
    println!("After click: {} ({})", mfa.status_label(), mfa.hidden_value());

    println!("\n=== Example completed successfully ===");
}
