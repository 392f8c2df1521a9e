//! End-to-end load-sequence scenarios against a local HTTP server.
//!
//! Success responses must end with the sorted remote entries; every
//! failure mode (refused connection, non-success status, undecodable
//! body) must end with exactly the 10 fixed fallback entries. In both
//! cases the placeholder entry is gone.

use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use regform_core::{
    CountrySelector, CountrySource, FormError, LoadOutcome, RestCountriesSource,
    FALLBACK_COUNTRIES,
};

fn source_for(server: &ServerGuard) -> RestCountriesSource {
    RestCountriesSource::with_endpoint(format!("{}/v3.1/all?fields=name,cca2", server.url()))
        .timeout(Duration::from_secs(5))
}

fn mock_countries(server: &mut ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/v3.1/all")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn assert_fallback(selector: &CountrySelector) {
    assert!(!selector.has_placeholder());
    assert_eq!(selector.len(), FALLBACK_COUNTRIES.len());
    for (entry, (iso2, name)) in selector.entries().iter().zip(FALLBACK_COUNTRIES) {
        assert_eq!(entry.value, iso2);
        assert_eq!(entry.label, name);
    }
}

#[test]
fn success_renders_sorted_entries() {
    let mut server = Server::new();
    let _m = mock_countries(
        &mut server,
        200,
        r#"[{"name":{"common":"Zimbabwe"},"cca2":"ZW"},{"name":{"common":"Andorra"},"cca2":"AD"}]"#,
    );

    let mut selector = CountrySelector::new();
    let outcome = selector.load_from(&source_for(&server));

    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert!(!selector.has_placeholder());
    let labels: Vec<&str> = selector.entries().iter().map(|e| e.label.as_str()).collect();
    let values: Vec<&str> = selector.entries().iter().map(|e| e.value.as_str()).collect();
    assert_eq!(labels, ["Andorra", "Zimbabwe"]);
    assert_eq!(values, ["AD", "ZW"]);
}

#[test]
fn sort_folds_accents_and_case() {
    let mut server = Server::new();
    let _m = mock_countries(
        &mut server,
        200,
        r#"[{"name":{"common":"Germany"},"cca2":"DE"},
            {"name":{"common":"france"},"cca2":"FR"},
            {"name":{"common":"Åland Islands"},"cca2":"AX"}]"#,
    );

    let mut selector = CountrySelector::new();
    selector.load_from(&source_for(&server));

    let labels: Vec<&str> = selector.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Åland Islands", "france", "Germany"]);
}

#[test]
fn richer_payload_entries_still_decode() {
    // restcountries sends more than the two requested fields; extras are
    // ignored rather than treated as a data failure.
    let mut server = Server::new();
    let _m = mock_countries(
        &mut server,
        200,
        r#"[{"name":{"common":"Japan","official":"Japan"},"cca2":"JP","flag":"x"}]"#,
    );

    let mut selector = CountrySelector::new();
    let outcome = selector.load_from(&source_for(&server));

    assert_eq!(outcome, LoadOutcome::Loaded(1));
    assert_eq!(selector.entries()[0].value, "JP");
}

#[test]
fn http_500_renders_fallback() {
    let mut server = Server::new();
    let _m = mock_countries(&mut server, 500, "internal error");

    let mut selector = CountrySelector::new();
    let outcome = selector.load_from(&source_for(&server));

    assert_eq!(outcome, LoadOutcome::Fallback);
    assert_fallback(&selector);
}

#[test]
fn http_404_renders_fallback() {
    let mut server = Server::new();
    let _m = mock_countries(&mut server, 404, "not found");

    let mut selector = CountrySelector::new();
    assert_eq!(
        selector.load_from(&source_for(&server)),
        LoadOutcome::Fallback
    );
    assert_fallback(&selector);
}

#[test]
fn malformed_json_renders_fallback() {
    let mut server = Server::new();
    let _m = mock_countries(&mut server, 200, "this is not json");

    let mut selector = CountrySelector::new();
    assert_eq!(
        selector.load_from(&source_for(&server)),
        LoadOutcome::Fallback
    );
    assert_fallback(&selector);
}

#[test]
fn missing_fields_render_fallback() {
    // Well-formed JSON, wrong shape: entries lack the name object.
    let mut server = Server::new();
    let _m = mock_countries(&mut server, 200, r#"[{"cca2":"US"}]"#);

    let mut selector = CountrySelector::new();
    assert_eq!(
        selector.load_from(&source_for(&server)),
        LoadOutcome::Fallback
    );
    assert_fallback(&selector);
}

#[test]
fn refused_connection_renders_fallback() {
    // Port 9 (discard) is not listening; the request is rejected before
    // any HTTP exchange.
    let source = RestCountriesSource::with_endpoint("http://127.0.0.1:9/v3.1/all")
        .timeout(Duration::from_secs(2));

    let mut selector = CountrySelector::new();
    assert_eq!(selector.load_from(&source), LoadOutcome::Fallback);
    assert_fallback(&selector);
    assert_eq!(selector.entries().first().unwrap().label, "United States");
    assert_eq!(selector.entries().last().unwrap().label, "Brazil");
}

#[test]
fn fetch_errors_carry_their_kind() {
    let mut server = Server::new();
    let _m = mock_countries(&mut server, 503, "maintenance");
    let err = source_for(&server).fetch().unwrap_err();
    assert!(matches!(err, FormError::Protocol { status: 503 }));

    let mut server = Server::new();
    let _m = mock_countries(&mut server, 200, "{broken");
    let err = source_for(&server).fetch().unwrap_err();
    assert!(matches!(err, FormError::Data(_)));

    let refused = RestCountriesSource::with_endpoint("http://127.0.0.1:9/v3.1/all")
        .timeout(Duration::from_secs(2));
    let err = refused.fetch().unwrap_err();
    assert!(matches!(err, FormError::Network(_)));
}

#[test]
fn reloading_an_unchanged_response_is_idempotent() {
    let mut server = Server::new();
    let _m = mock_countries(
        &mut server,
        200,
        r#"[{"name":{"common":"Brazil"},"cca2":"BR"},{"name":{"common":"Austria"},"cca2":"AT"}]"#,
    );
    let source = source_for(&server);

    let mut selector = CountrySelector::new();
    selector.load_from(&source);
    let first: Vec<_> = selector.entries().to_vec();

    selector.load_from(&source);
    assert_eq!(selector.entries(), first.as_slice());
}
