//! Browser launch port.

use async_trait::async_trait;

use super::DispatchError;

/// Opens URLs outside the app's own screens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Browser: Send + Sync {
    /// Opens the URL in the embedded in-app browser.
    async fn open_in_app(&self, url: &str) -> Result<(), DispatchError>;

    /// Hands the URL to the operating system's default browser.
    async fn open_external(&self, url: &str) -> Result<(), DispatchError>;
}
