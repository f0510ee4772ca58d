use serde::{Deserialize, Serialize};

/// Configuration for a single series inside a plot.
///
/// A series always references one Y column of the data log; everything else
/// is optional. Fields that are not meaningful for the owning plot's kind
/// (an icon on a bar chart, an X column on a pie chart) are silently ignored
/// at serialization time rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub y_column: String,
    /// X column reference; meaningful for line and scatter series only.
    #[serde(default)]
    pub x_column: Option<String>,
    /// Packed `0xRRGGBB` color. `Some(0)` is black, distinct from unset.
    #[serde(default)]
    pub color: Option<u32>,
    /// Per-wedge colors; meaningful for pie series only.
    #[serde(default)]
    pub wedge_colors: Vec<u32>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Marker icon token; meaningful for line and scatter series only.
    #[serde(default)]
    pub icon: Option<String>,
    /// Bar width; meaningful for bar series only.
    #[serde(default)]
    pub bar_width: Option<f64>,
}

impl SeriesConfig {
    #[must_use]
    pub fn new(y_column: impl Into<String>) -> Self {
        Self {
            y_column: y_column.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_column(mut self, x_column: impl Into<String>) -> Self {
        self.x_column = Some(x_column.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends one wedge color for pie series.
    #[must_use]
    pub fn with_wedge_color(mut self, color: u32) -> Self {
        self.wedge_colors.push(color);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = Some(bar_width);
        self
    }
}
