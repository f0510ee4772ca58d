//! Line-oriented transport seam.
//!
//! The physical channels (wired serial-style and wireless UART-like) live
//! outside this crate; hosts inject anything implementing [`LineChannel`].
//! [`DualTransport`] multiplexes exactly two of them behind a runtime
//! [`TransportMode`] switch.

mod memory;

pub use memory::MemoryChannel;

use serde::{Deserialize, Serialize};

/// Selects which of the two physical channels is currently active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    /// The wired, serial-style channel.
    #[default]
    Primary,
    /// The wireless, UART-like channel.
    Secondary,
}

/// Contract implemented by a physical line-oriented channel.
///
/// Writes are fire-and-forget at this layer; a fallible host channel should
/// handle or report failures underneath this trait.
pub trait LineChannel {
    /// Writes one line to the channel (terminator handling is the channel's
    /// concern).
    fn write_line(&mut self, line: &str);

    /// Returns the next complete inbound line, if one has arrived.
    fn poll_line(&mut self) -> Option<String>;
}

/// Exactly two channels behind one mode switch.
///
/// A mode change takes effect on the next send or receive; it never
/// retroactively redirects output already handed to a channel. Inbound lines
/// queued on the inactive channel stay unobserved until that channel becomes
/// active again.
#[derive(Debug)]
pub struct DualTransport<P: LineChannel, S: LineChannel> {
    primary: P,
    secondary: S,
    mode: TransportMode,
}

impl<P: LineChannel, S: LineChannel> DualTransport<P, S> {
    #[must_use]
    pub fn new(primary: P, secondary: S, mode: TransportMode) -> Self {
        Self {
            primary,
            secondary,
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TransportMode) {
        self.mode = mode;
    }

    /// Writes one line to the currently active channel.
    pub fn send(&mut self, line: &str) {
        tracing::trace!(mode = ?self.mode, len = line.len(), "transport write");
        match self.mode {
            TransportMode::Primary => self.primary.write_line(line),
            TransportMode::Secondary => self.secondary.write_line(line),
        }
    }

    /// Polls the currently active channel for one inbound line.
    pub fn try_receive_line(&mut self) -> Option<String> {
        match self.mode {
            TransportMode::Primary => self.primary.poll_line(),
            TransportMode::Secondary => self.secondary.poll_line(),
        }
    }

    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    pub fn secondary_mut(&mut self) -> &mut S {
        &mut self.secondary
    }
}
