use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::allocation::AllocationPlan;
use crate::errors::CoreError;

/// User-configurable settings. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to displayed amounts (e.g., "₹", "$", "€")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Plan the custom allocation starts from (and resets to)
    #[serde(default = "AllocationPlan::suggested")]
    pub default_allocation: AllocationPlan,

    /// strftime format for displaying expense dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            default_allocation: AllocationPlan::suggested(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Load settings from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Currency symbol must not be empty".into(),
            ));
        }
        if let Some(entry) = self
            .default_allocation
            .entries()
            .iter()
            .find(|e| !e.percentage.is_finite() || e.percentage < 0.0)
        {
            return Err(CoreError::ValidationError(format!(
                "Allocation for '{}' must be a non-negative number, got {}",
                entry.category, entry.percentage
            )));
        }
        validate_date_format(&self.date_format)
    }
}

/// A date format must parse as strftime and render a plain date: time and
/// zone specifiers fail on a `NaiveDate`.
fn validate_date_format(format: &str) -> Result<(), CoreError> {
    let invalid = || {
        CoreError::ValidationError(format!(
            "Date format '{format}' cannot display a calendar date"
        ))
    };
    if format.trim().is_empty() {
        return Err(invalid());
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format)).map_err(|_| invalid())
}
