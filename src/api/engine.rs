use crate::api::wire_contract::{encode_config, encode_data};
use crate::api::{ConnectionGate, ConnectionPhase, PlotEngineConfig};
use crate::core::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::transport::{DualTransport, LineChannel, TransportMode};

/// Orchestrator tying the plot model, the wire contract, and the
/// handshake-gated transport together.
///
/// Single-threaded and non-blocking throughout: `emit_plot`, `record_row`,
/// and `poll` each run to completion as one atomic unit.
pub struct PlotEngine<P: LineChannel, S: LineChannel> {
    gate: ConnectionGate<P, S>,
}

impl<P: LineChannel, S: LineChannel> PlotEngine<P, S> {
    #[must_use]
    pub fn new(primary: P, secondary: S, config: PlotEngineConfig) -> Self {
        let transport = DualTransport::new(primary, secondary, config.mode);
        Self {
            gate: ConnectionGate::with_sentinel(transport, config.handshake_sentinel),
        }
    }

    /// Serializes a plot's config message and routes it through the gate.
    ///
    /// Refuses plots that never received a series. Emitting the same title
    /// twice is legal and produces two independent messages.
    pub fn emit_plot(&mut self, plot: &PlotConfig) -> PlotResult<()> {
        if !plot.is_complete() {
            return Err(PlotError::IncompletePlot {
                title: plot.title.clone(),
            });
        }
        let line = encode_config(plot)?;
        self.gate.send(&line);
        Ok(())
    }

    /// Serializes one sampled row as a data message and routes it through
    /// the gate.
    ///
    /// Non-numeric column values are dropped from the message entirely; an
    /// all-non-numeric row still emits a message with an empty value map.
    pub fn record_row<'a, I>(&mut self, timestamp_ms: u64, row: I) -> PlotResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let line = encode_data(timestamp_ms, row)?;
        self.gate.send(&line);
        Ok(())
    }

    /// Runs the gate's receive hook; returns `true` when this call
    /// completed the handshake.
    pub fn poll(&mut self) -> bool {
        self.gate.poll()
    }

    /// Switches the active transport; effective on the next operation.
    pub fn set_mode(&mut self, mode: TransportMode) {
        self.gate.set_mode(mode);
    }

    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.gate.mode()
    }

    #[must_use]
    pub fn phase(&self) -> ConnectionPhase {
        self.gate.phase()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.gate.is_connected()
    }

    #[must_use]
    pub fn gate(&self) -> &ConnectionGate<P, S> {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut ConnectionGate<P, S> {
        &mut self.gate
    }
}
