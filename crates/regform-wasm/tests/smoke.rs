use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use regform_wasm::{dob_is_future, future_dob_warning, placeholder_label, MfaToggleHandle};

#[wasm_bindgen_test]
fn placeholder_label_is_stable() {
    assert_eq!(placeholder_label(), "Loading countries...");
}

#[wasm_bindgen_test]
fn dob_rule_matches_the_page() {
    assert!(dob_is_future("2026-08-07", "2026-08-06"));
    assert!(!dob_is_future("2026-08-06", "2026-08-06"));
    assert!(!dob_is_future("garbage", "2026-08-06"));
    assert!(!future_dob_warning().is_empty());
}

#[wasm_bindgen_test]
fn toggle_drives_the_hidden_field() {
    let mut toggle = MfaToggleHandle::new();
    assert_eq!(toggle.hidden_value(), "false");
    assert_eq!(toggle.status_label(), "MFA not activated");

    toggle.toggle();
    assert_eq!(toggle.hidden_value(), "true");
    assert!(toggle.aria_pressed());
    assert_eq!(toggle.status_label(), "MFA activated");

    toggle.toggle();
    assert_eq!(toggle.hidden_value(), "false");
    assert!(!toggle.aria_pressed());
}
