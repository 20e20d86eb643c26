//! Dispatch of resolution outcomes to the host's side-effect ports.

use std::sync::Arc;

use crate::domain::entities::{Resolution, ResolutionOutcome};
use crate::domain::ports::{Browser, DiagnosticsSink, DispatchError, NavigationRequest, Navigator};

/// Performs the side effects a [`Resolution`] asks for.
///
/// Each resolution triggers at most one navigation or browser launch. A parse
/// diagnostic, when present, is logged as exactly one debug entry before the
/// side effect runs.
pub struct OfferDispatcher {
    navigator: Arc<dyn Navigator>,
    browser: Arc<dyn Browser>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl OfferDispatcher {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        browser: Arc<dyn Browser>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            navigator,
            browser,
            diagnostics,
        }
    }

    /// Acts on `resolution`.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] reported by the navigator or browser.
    pub async fn dispatch(&self, resolution: Resolution) -> Result<(), DispatchError> {
        if let Some(diagnostic) = &resolution.diagnostic {
            self.diagnostics.debug(&diagnostic.log_line());
        }

        match resolution.outcome {
            ResolutionOutcome::NavigateToDomain { record, screen } => {
                self.navigator
                    .navigate(NavigationRequest::to_screen(screen, Some(record)))
                    .await
            }
            ResolutionOutcome::NavigateToFallbackScreen { screen } => {
                self.navigator
                    .navigate(NavigationRequest::to_screen(screen, None))
                    .await
            }
            ResolutionOutcome::OpenExternal {
                url,
                use_in_app_browser: true,
            } => self.browser.open_in_app(&url).await,
            ResolutionOutcome::OpenExternal {
                url,
                use_in_app_browser: false,
            } => self.browser.open_external(&url).await,
            ResolutionOutcome::NoAction => Ok(()),
        }
    }
}
