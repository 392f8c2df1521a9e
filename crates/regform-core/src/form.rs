// crates/regform-core/src/form.rs

//! The registration form aggregate: one value owning the three enhanced
//! controls of the page.

use crate::dob::DobField;
use crate::mfa::MfaToggle;
use crate::selector::{CountrySelector, LoadOutcome};
use crate::source::CountrySource;
use chrono::NaiveDate;

/// Client-side state of the user registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub countries: CountrySelector,
    pub dob: DobField,
    pub mfa: MfaToggle,
}

impl RegistrationForm {
    /// Initial page state: empty country control, date field capped at
    /// `today`, toggle off.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            countries: CountrySelector::new(),
            dob: DobField::new(today),
            mfa: MfaToggle::new(),
        }
    }

    /// Runs the country load sequence, as the page does once on load.
    pub fn init(&mut self, source: &dyn CountrySource) -> LoadOutcome {
        self.countries.load_from(source)
    }
}
