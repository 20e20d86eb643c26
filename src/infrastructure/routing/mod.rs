//! Route table implementations.

mod pattern_route_table;

pub use pattern_route_table::{DEFAULT_ROUTES, PatternRouteTable, RoutePattern};
