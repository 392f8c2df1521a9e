//! regform-rs — workspace facade
//!
//! Re-exports the `regform-core` API and provides a `prelude` for demos
//! and quick scripts. For programmatic use, depend on `regform-core`
//! directly; for a browser host, see `regform-wasm`.

pub use regform_core::*;

pub mod prelude {
    //! Convenient glob import for the demo targets.
    pub use regform_core::{
        fallback_records, parse_payload, sort_records, CountryRecord, CountrySelector,
        CountrySource, DobField, DobOutcome, FormError, LoadOutcome, MfaToggle,
        RegistrationForm, RestCountriesSource, Result, SelectorEntry, StaticSource,
        FALLBACK_COUNTRIES, PLACEHOLDER_LABEL,
    };
}
