//! Completion notifications.
//!
//! Playback is fire-and-forget: sinks never report failure to the clock.

use std::cell::RefCell;
use std::io::{self, Write};

/// Something that can signal the end of a session.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Play the completion signal. Failures are swallowed by the sink.
    fn play(&self);
}

/// Rings the terminal bell by writing BEL to a stream, stderr by default.
#[derive(Debug)]
pub struct TerminalBell<W: Write = io::Stderr> {
    writer: RefCell<W>,
}

impl TerminalBell {
    /// Create a terminal bell sink on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    /// Ring the bell on `writer` instead of stderr.
    #[must_use]
    pub const fn with_writer(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }
}

impl<W: Write> NotificationSink for TerminalBell<W> {
    fn play(&self) {
        let mut writer = self.writer.borrow_mut();
        if let Err(e) = writer.write_all(b"\x07").and_then(|()| writer.flush()) {
            tracing::debug!(error = %e, "terminal bell failed");
        }
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn play(&self) {}
}
