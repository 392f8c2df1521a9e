// crates/regform-core/src/lib.rs

pub mod dob;
pub mod error;
pub mod form;
pub mod mfa;
pub mod model;
pub mod selector;
pub mod source;
pub mod text;

// Re-exports
pub use crate::error::{FormError, Result};
// Export the Model Types
pub use crate::model::{fallback_records, sort_records, CountryRecord, FALLBACK_COUNTRIES};
// Export the View Models
pub use crate::dob::{DobField, DobOutcome, FUTURE_DOB_WARNING};
pub use crate::form::RegistrationForm;
pub use crate::mfa::MfaToggle;
pub use crate::selector::{CountrySelector, LoadOutcome, SelectorEntry, PLACEHOLDER_LABEL};
// Export the Source Seam (Crucial for users!)
pub use crate::source::{parse_payload, CountrySource, StaticSource};
#[cfg(feature = "remote")]
pub use crate::source::{RestCountriesSource, COUNTRY_API_URL, DEFAULT_TIMEOUT};
