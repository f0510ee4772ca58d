use serde::{Deserialize, Serialize};

use crate::api::HANDSHAKE_SENTINEL;
use crate::error::{PlotError, PlotResult};
use crate::transport::TransportMode;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// transport setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default = "default_handshake_sentinel")]
    pub handshake_sentinel: String,
}

impl PlotEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initially active transport mode.
    #[must_use]
    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the handshake sentinel line.
    #[must_use]
    pub fn with_handshake_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.handshake_sentinel = sentinel.into();
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidMessage(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidMessage(format!("failed to parse config: {e}")))
    }
}

impl Default for PlotEngineConfig {
    fn default() -> Self {
        Self {
            mode: TransportMode::default(),
            handshake_sentinel: default_handshake_sentinel(),
        }
    }
}

fn default_handshake_sentinel() -> String {
    HANDSHAKE_SENTINEL.to_owned()
}
