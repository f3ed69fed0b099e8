//! Diagnostic channel for parse failures
//!
//! Parsing reports a non-matching input through a [`DiagnosticSink`] instead of
//! writing to a global stream, so the parser stays testable without capturing
//! process output. The default sink forwards to `tracing`.

use std::sync::{Mutex, MutexGuard};

/// Receiver of warning diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Record a warning message
    fn warn(&self, message: &str);
}

/// Sink that emits diagnostics as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "mongo_uri", "{}", message);
    }
}

/// Sink that keeps diagnostics in memory
///
/// Useful in tests and for callers that want to inspect failures after a batch
/// of parses.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded messages
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
