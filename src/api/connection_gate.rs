use crate::transport::{DualTransport, LineChannel, TransportMode};

/// Line the companion application sends to announce it is listening.
pub const HANDSHAKE_SENTINEL: &str = "dataplot";

/// Handshake phase of the link to the companion application.
///
/// There is no path back to `Disconnected` while the device runs; a dropped
/// physical link is indistinguishable from "no inbound data yet" here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionPhase {
    #[default]
    Disconnected,
    Connected,
}

/// Handshake state machine and output buffer in front of the transport.
///
/// Until the sentinel arrives on the active channel every sent line is held
/// in an explicit FIFO buffer. The handshake flushes that buffer exactly
/// once, in original order, before any later send reaches the channel.
#[derive(Debug)]
pub struct ConnectionGate<P: LineChannel, S: LineChannel> {
    transport: DualTransport<P, S>,
    phase: ConnectionPhase,
    pending: Vec<String>,
    sentinel: String,
}

impl<P: LineChannel, S: LineChannel> ConnectionGate<P, S> {
    #[must_use]
    pub fn new(transport: DualTransport<P, S>) -> Self {
        Self::with_sentinel(transport, HANDSHAKE_SENTINEL)
    }

    #[must_use]
    pub fn with_sentinel(transport: DualTransport<P, S>, sentinel: impl Into<String>) -> Self {
        Self {
            transport,
            phase: ConnectionPhase::Disconnected,
            pending: Vec::new(),
            sentinel: sentinel.into(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.phase == ConnectionPhase::Connected
    }

    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.transport.mode()
    }

    /// Switches the active channel; effective on the next send or poll.
    pub fn set_mode(&mut self, mode: TransportMode) {
        self.transport.set_mode(mode);
    }

    /// Number of lines currently waiting for the handshake.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.pending.len()
    }

    /// Sends one line, or buffers it while the companion is not yet
    /// listening. Never blocks.
    pub fn send(&mut self, line: &str) {
        match self.phase {
            ConnectionPhase::Connected => self.transport.send(line),
            ConnectionPhase::Disconnected => {
                tracing::debug!(len = line.len(), "buffering line until handshake");
                self.pending.push(line.to_owned());
            }
        }
    }

    /// Drains inbound lines from the active channel and runs the handshake
    /// check on each.
    ///
    /// Returns `true` when this call performed the Disconnected→Connected
    /// transition. The buffer flush happens inside the same call, as
    /// sequential per-line writes in original order, so no later send can
    /// overtake buffered output. Inbound lines after the transition are
    /// ignored; a sentinel queued on the inactive channel is never observed
    /// here.
    pub fn poll(&mut self) -> bool {
        let mut transitioned = false;
        while let Some(line) = self.transport.try_receive_line() {
            if self.phase == ConnectionPhase::Disconnected && line == self.sentinel {
                self.connect();
                transitioned = true;
            }
        }
        transitioned
    }

    fn connect(&mut self) {
        self.phase = ConnectionPhase::Connected;
        tracing::info!(
            mode = ?self.transport.mode(),
            buffered = self.pending.len(),
            "companion handshake received, flushing buffer"
        );
        for line in self.pending.drain(..) {
            self.transport.send(&line);
        }
    }

    #[must_use]
    pub fn transport(&self) -> &DualTransport<P, S> {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut DualTransport<P, S> {
        &mut self.transport
    }
}
