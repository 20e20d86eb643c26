//! Typed routes produced by the route table.

use std::collections::BTreeMap;

/// Route name of the single gift-card purchase flow.
pub const GIFT_CARD_ROUTE: &str = "giftcard";
/// Route name of the gift-card listing.
pub const SHOP_ROUTE: &str = "shop";

/// Parameters of the gift-card route, decoded once at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftCardParams {
    pub merchant: Option<String>,
}

impl GiftCardParams {
    /// Lower-cased merchant name, if one was supplied and is not blank.
    pub fn merchant_key(&self) -> Option<String> {
        self.merchant
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(str::to_lowercase)
    }
}

/// A matched in-app route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    GiftCard(GiftCardParams),
    Shop,
    /// Any route the offer flow has no special handling for.
    Other {
        name: String,
        params: BTreeMap<String, String>,
    },
}

impl AppRoute {
    /// Builds the typed route from a route name and its raw parameters.
    pub fn from_parts(name: &str, mut params: BTreeMap<String, String>) -> Self {
        match name {
            GIFT_CARD_ROUTE => AppRoute::GiftCard(GiftCardParams {
                merchant: params.remove("merchant"),
            }),
            SHOP_ROUTE => AppRoute::Shop,
            _ => AppRoute::Other {
                name: name.to_string(),
                params,
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AppRoute::GiftCard(_) => GIFT_CARD_ROUTE,
            AppRoute::Shop => SHOP_ROUTE,
            AppRoute::Other { name, .. } => name,
        }
    }
}

/// Routes matched for one path, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    pub routes: Vec<AppRoute>,
}

impl RouteMatch {
    pub fn single(route: AppRoute) -> Self {
        Self {
            routes: vec![route],
        }
    }

    pub fn first(&self) -> Option<&AppRoute> {
        self.routes.first()
    }
}
