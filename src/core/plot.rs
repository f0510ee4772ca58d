use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisOptions, SeriesConfig};

/// Upper bound on series held by one plot; appends past it are dropped.
pub const MAX_SERIES_PER_PLOT: usize = 10;

/// Closed set of chart kinds understood by the companion application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    Line,
    Scatter,
    Bar,
    Pie,
    Histogram,
}

impl PlotKind {
    /// Fixed wire tag for the config message's `graphType` field.
    #[must_use]
    pub fn wire_tag(self) -> &'static str {
        match self {
            PlotKind::Line => "line",
            PlotKind::Scatter => "scatter",
            PlotKind::Bar => "bar",
            PlotKind::Pie => "pie",
            PlotKind::Histogram => "histogram",
        }
    }
}

/// A single chart of any kind.
///
/// Plots are logically identified by their title; the core does not enforce
/// uniqueness, and emitting the same title twice produces two independent
/// config messages. Series are appended, never removed, and a plot is
/// complete once it holds at least one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub kind: PlotKind,
    pub title: String,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
    series: SmallVec<[SeriesConfig; MAX_SERIES_PER_PLOT]>,
}

impl PlotConfig {
    #[must_use]
    pub fn new(kind: PlotKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_axis: None,
            y_axis: None,
            series: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn line(title: impl Into<String>) -> Self {
        Self::new(PlotKind::Line, title)
    }

    #[must_use]
    pub fn scatter(title: impl Into<String>) -> Self {
        Self::new(PlotKind::Scatter, title)
    }

    #[must_use]
    pub fn bar(title: impl Into<String>) -> Self {
        Self::new(PlotKind::Bar, title)
    }

    #[must_use]
    pub fn pie(title: impl Into<String>) -> Self {
        Self::new(PlotKind::Pie, title)
    }

    #[must_use]
    pub fn histogram(title: impl Into<String>) -> Self {
        Self::new(PlotKind::Histogram, title)
    }

    /// Sets X axis options. Stored for every kind; serialization ignores
    /// them for pie, bar, and histogram plots.
    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisOptions) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Sets Y axis options. Serialization ignores them for pie plots.
    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOptions) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Appends one series.
    ///
    /// A series past [`MAX_SERIES_PER_PLOT`] is dropped and logged; the
    /// existing list is never disturbed.
    pub fn add_series(&mut self, series: SeriesConfig) {
        if self.series.len() >= MAX_SERIES_PER_PLOT {
            tracing::warn!(
                title = %self.title,
                y_column = %series.y_column,
                "series cap reached, dropping series"
            );
            return;
        }
        self.series.push(series);
    }

    /// Appends present slots in order, skipping absent ones.
    ///
    /// Mirrors call sites that collect a fixed number of optional series
    /// parameters.
    pub fn add_series_slots<I>(&mut self, slots: I)
    where
        I: IntoIterator<Item = Option<SeriesConfig>>,
    {
        for series in slots.into_iter().flatten() {
            self.add_series(series);
        }
    }

    /// Builder-style [`add_series`](Self::add_series).
    #[must_use]
    pub fn with_series(mut self, series: SeriesConfig) -> Self {
        self.add_series(series);
        self
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesConfig] {
        &self.series
    }

    /// True once at least one series has been added; incomplete plots are
    /// refused by [`PlotEngine::emit_plot`](crate::api::PlotEngine::emit_plot).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.series.is_empty()
    }
}
