//! Error handling example for regform-rs
//!
//! Shows the tagged failure taxonomy of the country source, and how the
//! selector resolves every kind into the same fallback branch.

use regform_rs::prelude::*;
use std::time::Duration;

fn classify(result: Result<Vec<CountryRecord>>) {
    match result {
        Ok(records) => println!("ok: {} records", records.len()),
        Err(FormError::Network(e)) => println!("network failure: {e}"),
        Err(FormError::Protocol { status }) => println!("protocol failure: HTTP {status}"),
        Err(FormError::Data(e)) => println!("data failure: {e}"),
    }
}

fn main() {
    println!("=== regform-rs Error Handling Example ===\n");

    // A request that cannot connect.
    println!("--- Refused connection ---");
    let refused = RestCountriesSource::with_endpoint("http://127.0.0.1:9/v3.1/all")
        .timeout(Duration::from_secs(2));
    classify(refused.fetch());

    // A body that is not the expected list.
    println!("\n--- Undecodable payload ---");
    classify(parse_payload("this is not json"));
    classify(parse_payload(r#"[{"cca2":"US"}]"#));

    // Whatever the failure, the selector ends on the fallback list.
    println!("\n--- Selector degradation ---");
    let mut selector = CountrySelector::new();
    let outcome = selector.load_from(&refused);
    println!("outcome: {outcome:?}, {} entries", selector.len());
    for entry in selector.entries().iter().take(3) {
        println!("- {} ({})", entry.label, entry.value);
    }
}
