mod connection_gate;
mod engine;
mod engine_config;
pub mod wire_contract;

pub use connection_gate::{ConnectionGate, ConnectionPhase, HANDSHAKE_SENTINEL};
pub use engine::PlotEngine;
pub use engine_config::PlotEngineConfig;
pub use wire_contract::{
    AxisMessage, ConfigMessage, DEFAULT_X_AXIS_LABEL, DEFAULT_Y_AXIS_LABEL, DataMessage,
    MESSAGE_TYPE_CONFIG, MESSAGE_TYPE_DATA, SeriesMessage, config_message, data_message,
    encode_config, encode_data, format_color,
};
