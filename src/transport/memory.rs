use std::collections::VecDeque;

use crate::transport::LineChannel;

/// In-memory [`LineChannel`] double.
///
/// Records every written line and serves scripted inbound lines, so gate and
/// engine behavior can be asserted without physical hardware.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    written: Vec<String>,
    inbound: VecDeque<String>,
}

impl MemoryChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one inbound line as if it arrived from the remote end.
    pub fn push_inbound(&mut self, line: impl Into<String>) {
        self.inbound.push_back(line.into());
    }

    /// Lines written so far, oldest first.
    #[must_use]
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Drains and returns all written lines.
    pub fn take_written(&mut self) -> Vec<String> {
        std::mem::take(&mut self.written)
    }
}

impl LineChannel for MemoryChannel {
    fn write_line(&mut self, line: &str) {
        self.written.push(line.to_owned());
    }

    fn poll_line(&mut self) -> Option<String> {
        self.inbound.pop_front()
    }
}
