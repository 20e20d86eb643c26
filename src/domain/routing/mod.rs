//! In-app routes and the route table contract.

pub mod route;
pub mod route_table;

pub use route::{AppRoute, GIFT_CARD_ROUTE, GiftCardParams, RouteMatch, SHOP_ROUTE};
pub use route_table::{RouteParseError, RouteTable};

#[cfg(test)]
pub use route_table::MockRouteTable;
