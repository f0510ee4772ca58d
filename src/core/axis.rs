use serde::{Deserialize, Serialize};

/// Optional axis configuration for one axis of a plot.
///
/// Every field distinguishes "unset" from an explicit value; in particular a
/// minimum of `0.0` is a real bound, not an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AxisOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the axis title shown by the companion application.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the lower bound of the axis range.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound of the axis range.
    ///
    /// `min <= max` is not enforced here; range validation belongs to the
    /// companion application.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}
