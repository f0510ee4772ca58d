//! Canonical wire messages exchanged with the companion application.
//!
//! One JSON object per line, two shapes: a `config` message describing a
//! plot, and a `data` message carrying one sampled row. Mapping from the
//! model types is total; every optional field has a documented default.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisOptions, PlotConfig, PlotKind, SeriesConfig};
use crate::error::{PlotError, PlotResult};

pub const MESSAGE_TYPE_CONFIG: &str = "config";
pub const MESSAGE_TYPE_DATA: &str = "data";

/// Label substituted when an axis carries no title.
pub const DEFAULT_X_AXIS_LABEL: &str = "X axis";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Y axis";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMessage {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_column: Option<String>,
    pub y_column: String,
    /// `#rrggbb` when a color is set, empty string when not. Packed color
    /// zero is valid black and serializes as `#000000`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<f64>,
    /// Per-wedge colors for pie series.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(rename = "graphType")]
    pub graph_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisMessage>,
    pub series: Vec<SeriesMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    /// Milliseconds since device start.
    pub timestamp: u64,
    pub values: IndexMap<String, f64>,
}

/// Formats a packed `0xRRGGBB` color as lowercase `#rrggbb` hex.
#[must_use]
pub fn format_color(packed: u32) -> String {
    format!("#{:06x}", packed & 0x00FF_FFFF)
}

fn axis_message(options: Option<&AxisOptions>, default_label: &str) -> AxisMessage {
    match options {
        Some(options) => AxisMessage {
            label: options
                .title
                .clone()
                .unwrap_or_else(|| default_label.to_owned()),
            min: options.min,
            max: options.max,
        },
        None => AxisMessage {
            label: default_label.to_owned(),
            min: None,
            max: None,
        },
    }
}

fn series_message(kind: PlotKind, series: &SeriesConfig) -> SeriesMessage {
    let per_point = matches!(kind, PlotKind::Line | PlotKind::Scatter);
    SeriesMessage {
        x_column: if per_point {
            series.x_column.clone()
        } else {
            None
        },
        y_column: series.y_column.clone(),
        color: series.color.map(format_color).unwrap_or_default(),
        icon: if per_point { series.icon.clone() } else { None },
        display_name: series
            .display_name
            .clone()
            .unwrap_or_else(|| series.y_column.clone()),
        bar_width: if kind == PlotKind::Bar {
            series.bar_width
        } else {
            None
        },
        colors: if kind == PlotKind::Pie {
            series.wedge_colors.iter().copied().map(format_color).collect()
        } else {
            Vec::new()
        },
    }
}

/// Maps a plot to its config message, applying default substitution.
///
/// Pie plots carry no axis objects; bar and histogram plots ignore
/// user-supplied X axis options and emit the default X axis.
#[must_use]
pub fn config_message(plot: &PlotConfig) -> ConfigMessage {
    let (x, y) = match plot.kind {
        PlotKind::Pie => (None, None),
        PlotKind::Bar | PlotKind::Histogram => (
            Some(axis_message(None, DEFAULT_X_AXIS_LABEL)),
            Some(axis_message(plot.y_axis.as_ref(), DEFAULT_Y_AXIS_LABEL)),
        ),
        PlotKind::Line | PlotKind::Scatter => (
            Some(axis_message(plot.x_axis.as_ref(), DEFAULT_X_AXIS_LABEL)),
            Some(axis_message(plot.y_axis.as_ref(), DEFAULT_Y_AXIS_LABEL)),
        ),
    };

    ConfigMessage {
        message_type: MESSAGE_TYPE_CONFIG.to_owned(),
        graph_type: plot.kind.wire_tag().to_owned(),
        title: plot.title.clone(),
        x,
        y,
        series: plot
            .series()
            .iter()
            .map(|series| series_message(plot.kind, series))
            .collect(),
    }
}

/// Maps one sampled row to its data message.
///
/// Values are kept only when they parse as finite `f64`; everything else is
/// dropped from the map entirely. Column order is preserved.
#[must_use]
pub fn data_message<'a, I>(timestamp_ms: u64, row: I) -> DataMessage
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut values = IndexMap::new();
    for (column, raw) in row {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                values.insert(column.to_owned(), value);
            }
            _ => {}
        }
    }

    DataMessage {
        message_type: MESSAGE_TYPE_DATA.to_owned(),
        timestamp: timestamp_ms,
        values,
    }
}

/// Encodes a plot's config message as one JSON line.
pub fn encode_config(plot: &PlotConfig) -> PlotResult<String> {
    serde_json::to_string(&config_message(plot))
        .map_err(|e| PlotError::InvalidMessage(format!("failed to serialize config message: {e}")))
}

/// Encodes one sampled row as a JSON data line.
pub fn encode_data<'a, I>(timestamp_ms: u64, row: I) -> PlotResult<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    serde_json::to_string(&data_message(timestamp_ms, row))
        .map_err(|e| PlotError::InvalidMessage(format!("failed to serialize data message: {e}")))
}
