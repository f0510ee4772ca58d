//! dataplot-rs: device-side chart description and telemetry streaming.
//!
//! This crate builds chart configurations as plain value types, serializes
//! them into a line-oriented JSON wire contract, and hands the resulting
//! lines to a handshake-gated dual transport so output survives a companion
//! application that is not yet listening.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod transport;

pub use api::{HANDSHAKE_SENTINEL, PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
