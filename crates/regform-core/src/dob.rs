// crates/regform-core/src/dob.rs

//! Date-of-birth field.
//!
//! The maximum selectable date is capped at "today" when the field is
//! constructed, and any entered date strictly later than today is
//! rejected: the field is cleared and a warning for the user is
//! produced. No other validation (minimum age, plausibility) applies.

use chrono::NaiveDate;

/// Warning shown to the user when a future date is entered.
pub const FUTURE_DOB_WARNING: &str = "Date of birth cannot be in the future.";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of entering a value into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DobOutcome {
    /// The date was stored.
    Accepted(NaiveDate),
    /// The date lies in the future; the field was cleared.
    Future { warning: &'static str },
    /// The input was not a date; the field was cleared.
    Invalid,
}

/// The date-of-birth input control.
///
/// "Today" is injected at construction so the rule stays deterministic
/// under test; hosts pass the current date.
#[derive(Debug, Clone)]
pub struct DobField {
    today: NaiveDate,
    value: Option<NaiveDate>,
}

impl DobField {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, value: None }
    }

    /// The latest selectable date, i.e. the construction-time today.
    pub fn max_date(&self) -> NaiveDate {
        self.today
    }

    /// Applies a change to the field, in `YYYY-MM-DD` form.
    pub fn set(&mut self, input: &str) -> DobOutcome {
        match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
            Ok(date) if date > self.today => {
                self.value = None;
                DobOutcome::Future {
                    warning: FUTURE_DOB_WARNING,
                }
            }
            Ok(date) => {
                self.value = Some(date);
                DobOutcome::Accepted(date)
            }
            Err(_) => {
                self.value = None;
                DobOutcome::Invalid
            }
        }
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }
}
