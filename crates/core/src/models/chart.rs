use serde::{Deserialize, Serialize};

/// A single labelled point for chart rendering.
///
/// Values are rounded here so renderers can draw them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// X-axis label or slice name (e.g., "Year 3", "Healthcare")
    pub label: String,

    /// Value rounded to 2 decimal places
    pub value: f64,
}

impl ChartDataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
