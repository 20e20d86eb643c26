//! Deep-link resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    GiftCardConfig, InboundLink, LinkDiagnostic, Resolution, ResolutionOutcome, Screen,
};
use crate::domain::routing::{AppRoute, GiftCardParams, RouteMatch, RouteTable};

/// Turns inbound offer links into navigation decisions.
///
/// Resolution is a pure function of the link, the candidate gift cards and
/// the read-only route table. It never fails: unparseable links degrade to
/// opening the URL externally, unknown merchants degrade to the shop listing.
///
/// # Resolution Order
///
/// 1. Empty URL → [`ResolutionOutcome::NoAction`]
/// 2. Strip the deep-link prefix (if present) and parse the path
/// 3. Gift-card route → matching card, or the shop listing
/// 4. Shop route → the shop listing
/// 5. Anything else → open the original URL in the requested browser
pub struct LinkResolver<T: RouteTable> {
    prefix: String,
    route_table: Arc<T>,
}

impl<T: RouteTable> LinkResolver<T> {
    /// Creates a resolver for links starting with `prefix` (e.g. `app://open`).
    pub fn new(prefix: impl Into<String>, route_table: Arc<T>) -> Self {
        Self {
            prefix: prefix.into(),
            route_table,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn route_table(&self) -> &T {
        &self.route_table
    }

    /// Resolves `link` against `candidates`.
    ///
    /// When several candidates share a name case-insensitively, the first one
    /// in iteration order wins. A parse failure attaches exactly one
    /// [`LinkDiagnostic`] for the caller to log.
    pub fn resolve(&self, link: &InboundLink, candidates: &[GiftCardConfig]) -> Resolution {
        if link.is_empty() {
            return Resolution::new(ResolutionOutcome::NoAction);
        }

        let path = self.strip_prefix(&link.url);

        match self.route_table.parse_path(path) {
            Ok(Some(route_match)) => {
                if let Some(outcome) = Self::in_app_outcome(&route_match, candidates) {
                    return Resolution::new(outcome);
                }
            }
            Ok(None) => {}
            Err(err) => {
                let diagnostic = LinkDiagnostic {
                    message: format!("Something went wrong parsing offer URL: {}", link.url),
                    detail: json!({ "message": err.to_string(), "error": err }),
                };
                return Resolution::with_diagnostic(Self::open_external(link), Some(diagnostic));
            }
        }

        Resolution::new(Self::open_external(link))
    }

    /// Removes the deep-link prefix from the start of `url`, if present.
    fn strip_prefix<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.prefix.as_str()).unwrap_or(url)
    }

    /// In-app outcome for the first matched route, or `None` to open externally.
    fn in_app_outcome(
        route_match: &RouteMatch,
        candidates: &[GiftCardConfig],
    ) -> Option<ResolutionOutcome> {
        match route_match.first()? {
            AppRoute::GiftCard(params) => Some(Self::gift_card_outcome(params, candidates)),
            AppRoute::Shop => Some(Self::shop_fallback()),
            AppRoute::Other { .. } => None,
        }
    }

    fn gift_card_outcome(
        params: &GiftCardParams,
        candidates: &[GiftCardConfig],
    ) -> ResolutionOutcome {
        let card = params
            .merchant_key()
            .and_then(|key| candidates.iter().find(|card| card.matches_name(&key)));

        match card {
            Some(record) => ResolutionOutcome::NavigateToDomain {
                record: record.clone(),
                screen: Screen::BuyGiftCard,
            },
            None => Self::shop_fallback(),
        }
    }

    fn shop_fallback() -> ResolutionOutcome {
        ResolutionOutcome::NavigateToFallbackScreen {
            screen: Screen::ShopHome,
        }
    }

    fn open_external(link: &InboundLink) -> ResolutionOutcome {
        ResolutionOutcome::OpenExternal {
            url: link.url.clone(),
            use_in_app_browser: link.open_in_web_view,
        }
    }
}
