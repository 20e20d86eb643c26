//! Diagnostics port and its tracing-backed implementation.

/// Accepts debug-level diagnostic messages.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticsSink: Send + Sync {
    fn debug(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "offer_link", "{}", message);
    }
}
