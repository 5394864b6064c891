//! Injected observability collaborator.
//!
//! The dispatcher logs through an `OpLogger` passed in at construction
//! rather than a process-global logger, so the hosting transport decides
//! where operation logs go. `TracingLogger` forwards to the `tracing`
//! ecosystem; `RecordingLogger` collects lines in memory for assertions.

use parking_lot::Mutex;

/// Sink for per-invocation operation logs.
///
/// Implementations must not fail; logging is not consensus- or
/// correctness-critical and callers never branch on it.
pub trait OpLogger: Send + Sync {
    /// Record an operation outcome (writes, reads, deletes).
    fn info(&self, message: &str);

    /// Record diagnostic detail (query documents, routing).
    fn debug(&self, message: &str);
}

/// `OpLogger` forwarding to the `tracing` ecosystem.
///
/// The default collaborator when none is injected explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl OpLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// `OpLogger` collecting lines in memory.
///
/// Lets tests assert which operations were logged without installing a
/// tracing subscriber.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns true if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }
}

impl OpLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }

    fn debug(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}
