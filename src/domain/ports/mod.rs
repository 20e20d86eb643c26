//! Side-effect ports implemented by the host shell.
//!
//! The resolver never touches these; [`crate::application::services::OfferDispatcher`]
//! drives them after a resolution has been made.
//!
//! - [`Navigator`] - Screen transitions
//! - [`Browser`] - Embedded or system browser launch
//! - [`DiagnosticsSink`] - Debug-level diagnostics

pub mod browser;
pub mod diagnostics;
pub mod navigator;

pub use browser::Browser;
pub use diagnostics::{DiagnosticsSink, TracingDiagnostics};
pub use navigator::{NavigationRequest, Navigator};

/// Errors reported by a port while performing a side effect.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Browser launch failed: {0}")]
    Browser(String),
}

#[cfg(test)]
pub use browser::MockBrowser;
#[cfg(test)]
pub use diagnostics::MockDiagnosticsSink;
#[cfg(test)]
pub use navigator::MockNavigator;
