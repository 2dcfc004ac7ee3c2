//! Forms configuration

use crate::domain::fields::FormKind;
use crate::form::{BookingForm, ContactForm, FormSpec};
use crate::{FormsError, FormsResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-form settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// How long the confirmation is shown before the form resets
    pub reset_delay_ms: u64,
}

impl FormSettings {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Settings for both forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub booking: FormSettings,
    pub contact: FormSettings,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            booking: FormSettings { reset_delay_ms: BookingForm::DEFAULT_RESET_DELAY_MS },
            contact: FormSettings { reset_delay_ms: ContactForm::DEFAULT_RESET_DELAY_MS },
        }
    }
}

impl FormsConfig {
    /// Load from a JSON file
    pub fn load(path: &str) -> FormsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FormsError::Config(format!("{}: {}", path, e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> FormsResult<Self> {
        serde_json::from_str(content).map_err(|e| FormsError::Config(e.to_string()))
    }

    pub fn settings(&self, kind: FormKind) -> &FormSettings {
        match kind {
            FormKind::Booking => &self.booking,
            FormKind::Contact => &self.contact,
        }
    }

    pub fn reset_delay(&self, kind: FormKind) -> Duration {
        self.settings(kind).reset_delay()
    }
}
