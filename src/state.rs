//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkResolver;
use crate::domain::repositories::GiftCardCatalog;
use crate::infrastructure::routing::PatternRouteTable;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LinkResolver<PatternRouteTable>>,
    pub catalog: Arc<dyn GiftCardCatalog>,
}

impl AppState {
    pub fn new(
        resolver: Arc<LinkResolver<PatternRouteTable>>,
        catalog: Arc<dyn GiftCardCatalog>,
    ) -> Self {
        Self { resolver, catalog }
    }
}
