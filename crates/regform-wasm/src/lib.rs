//! regform-wasm — WebAssembly bindings for regform-core
//!
//! This crate exposes a small JS/WASM API over the registration-form
//! models. The host page performs the network fetch itself (so the
//! module carries no HTTP stack) and hands the response body to the
//! module, which owns decoding, sorting, the fallback branch and the
//! toggle state.
//!
//! What it provides
//! ----------------
//! - `placeholder_label()` — the transient entry to render while loading
//! - `apply_countries_payload(body)` — sorted entries, or the fallback
//!   entries when the body is not the expected list
//! - `fallback_entries()` — the fixed 10-entry table
//! - `dob_is_future(value, today)` / `future_dob_warning()` — the
//!   date-of-birth rule
//! - `MfaToggleHandle` — the two-state toggle behind the hidden field
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, {
//!   placeholder_label, apply_countries_payload, fallback_entries, MfaToggleHandle,
//! } from 'regform-wasm';
//!
//! async function main() {
//!   await init();
//!   select.add(new Option(placeholder_label()));
//!   let entries;
//!   try {
//!     const response = await fetch('https://restcountries.com/v3.1/all?fields=name,cca2');
//!     entries = response.ok ? apply_countries_payload(await response.text())
//!                           : fallback_entries();
//!   } catch {
//!     entries = fallback_entries();
//!   }
//!   select.options.length = 0;
//!   for (const e of entries) select.add(new Option(e.label, e.value));
//!
//!   const toggle = new MfaToggleHandle();
//!   button.addEventListener('click', () => {
//!     toggle.toggle();
//!     hidden.value = toggle.hidden_value();
//!     button.setAttribute('aria-pressed', toggle.aria_pressed());
//!     status.textContent = toggle.status_label();
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - All list-returning functions yield JSON-serializable arrays of
//!   `{ value, label }` objects, already in render order.
//! - The entries returned by `apply_countries_payload` are exactly one
//!   of {decoded remote list, fallback list}; the placeholder is never
//!   among them.

use js_sys::Array;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use chrono::NaiveDate;
use regform_core::{
    fallback_records, parse_payload, CountrySelector, DobField, DobOutcome, MfaToggle,
    SelectorEntry, FUTURE_DOB_WARNING, PLACEHOLDER_LABEL,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing regform WASM module...".into());
}

/* --------------------------------------------------------------------------
   Country Selector
-------------------------------------------------------------------------- */

/// Label of the transient entry rendered while the fetch is pending.
#[wasm_bindgen]
pub fn placeholder_label() -> String {
    PLACEHOLDER_LABEL.to_string()
}

/// Completes the load sequence for a response body the host fetched.
///
/// Returns the final entries: the sorted decoded list, or the fixed
/// fallback list when the body is not the expected shape. Never throws.
#[wasm_bindgen]
pub fn apply_countries_payload(body: &str) -> JsValue {
    let mut selector = CountrySelector::new();
    selector.begin_loading();
    selector.apply(parse_payload(body));
    entries_to_js(selector.entries())
}

/// The fixed 10-entry fallback table, in its fixed order. For hosts
/// whose fetch was rejected before any body existed.
#[wasm_bindgen]
pub fn fallback_entries() -> JsValue {
    let entries: Vec<SelectorEntry> = fallback_records()
        .into_iter()
        .map(SelectorEntry::from)
        .collect();
    entries_to_js(&entries)
}

// Map to JS serializable objects while preserving order.
fn entries_to_js(entries: &[SelectorEntry]) -> JsValue {
    let array = Array::new();
    for entry in entries {
        array.push(&to_value(entry).unwrap());
    }
    array.into()
}

/* --------------------------------------------------------------------------
   Date of Birth
-------------------------------------------------------------------------- */

/// True when `value` parses as a date strictly later than `today`
/// (both `YYYY-MM-DD`). Unparseable input is not "future".
#[wasm_bindgen]
pub fn dob_is_future(value: &str, today: &str) -> bool {
    let Ok(today) = NaiveDate::parse_from_str(today, "%Y-%m-%d") else {
        return false;
    };
    let mut field = DobField::new(today);
    matches!(field.set(value), DobOutcome::Future { .. })
}

/// Warning to alert when a future date was rejected.
#[wasm_bindgen]
pub fn future_dob_warning() -> String {
    FUTURE_DOB_WARNING.to_string()
}

/* --------------------------------------------------------------------------
   MFA Toggle
-------------------------------------------------------------------------- */

/// The two-state MFA toggle. Initial state is always off.
#[wasm_bindgen]
pub struct MfaToggleHandle {
    inner: MfaToggle,
}

#[wasm_bindgen]
impl MfaToggleHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MfaToggleHandle {
        MfaToggleHandle {
            inner: MfaToggle::new(),
        }
    }

    /// Inverts the state; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.inner.toggle()
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Value for the hidden form field (`"true"` / `"false"`).
    pub fn hidden_value(&self) -> String {
        self.inner.hidden_value().to_string()
    }

    /// Value for the `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> bool {
        self.inner.aria_pressed()
    }

    pub fn status_label(&self) -> String {
        self.inner.status_label().to_string()
    }

    pub fn button_class(&self) -> String {
        self.inner.button_class().to_string()
    }

    pub fn indicator_class(&self) -> String {
        self.inner.indicator_class().to_string()
    }
}

impl Default for MfaToggleHandle {
    fn default() -> Self {
        Self::new()
    }
}
