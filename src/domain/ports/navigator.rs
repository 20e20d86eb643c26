//! Screen navigation port.

use async_trait::async_trait;

use super::DispatchError;
use crate::domain::entities::{GiftCardConfig, Screen};

/// A screen transition requested by a resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub navigator: &'static str,
    pub screen: &'static str,
    /// Gift card passed to the purchase screen as `cardConfig`.
    pub card: Option<GiftCardConfig>,
}

impl NavigationRequest {
    pub fn to_screen(screen: Screen, card: Option<GiftCardConfig>) -> Self {
        Self {
            navigator: screen.navigator(),
            screen: screen.name(),
            card,
        }
    }
}

/// Performs screen transitions in the host application.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    /// # Errors
    ///
    /// Returns [`DispatchError::Navigation`] if the host rejects the transition.
    async fn navigate(&self, request: NavigationRequest) -> Result<(), DispatchError>;
}
