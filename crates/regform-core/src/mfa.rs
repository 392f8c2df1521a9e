// crates/regform-core/src/mfa.rs

//! MFA toggle.
//!
//! Two-state control backing the "multi-factor authentication enabled"
//! flag. The boolean is an explicit field of the view model (not
//! ambient captured state), so multiple instances and test harnesses do
//! not collide. Each toggle inverts the state; the accessors derive the
//! hidden form value, the accessibility flag, the status label and the
//! mutually exclusive style classes from it.

const LABEL_ON: &str = "MFA activated";
const LABEL_OFF: &str = "MFA not activated";

/// The toggle control. Initial state is always off.
#[derive(Debug, Clone, Copy, Default)]
pub struct MfaToggle {
    enabled: bool,
}

impl MfaToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inverts the state; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Value of the hidden form field.
    pub fn hidden_value(&self) -> &'static str {
        if self.enabled {
            "true"
        } else {
            "false"
        }
    }

    /// Mirrors the state for the `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> bool {
        self.enabled
    }

    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            LABEL_ON
        } else {
            LABEL_OFF
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.enabled {
            "toggle-on"
        } else {
            "toggle-off"
        }
    }

    pub fn indicator_class(&self) -> &'static str {
        if self.enabled {
            "indicator-on"
        } else {
            "indicator-off"
        }
    }
}
