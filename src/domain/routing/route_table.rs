//! Route table contract consumed by the resolver.

use serde::Serialize;

use super::route::RouteMatch;

/// Errors raised while turning a path into routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteParseError {
    #[error("Malformed percent-encoding in path '{path}' at byte {position}")]
    MalformedEncoding { path: String, position: usize },

    #[error("Path '{path}' does not decode to valid UTF-8")]
    InvalidUtf8 { path: String },

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Maps a path to the in-app routes it addresses.
///
/// # Returns
///
/// - `Ok(Some(match))` when the path addresses a known route
/// - `Ok(None)` when no pattern matches
/// - `Err(_)` when the path cannot be parsed at all
///
/// # Implementations
///
/// - [`crate::infrastructure::routing::PatternRouteTable`] - Regex-backed table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RouteTable: Send + Sync {
    fn parse_path(&self, path: &str) -> Result<Option<RouteMatch>, RouteParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_serializes_with_kind() {
        let err = RouteParseError::MalformedEncoding {
            path: "/%%%invalid".to_string(),
            position: 1,
        };

        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "malformed_encoding");
        assert_eq!(json["path"], "/%%%invalid");
        assert_eq!(json["position"], 1);
    }

    #[test]
    fn test_parse_error_display() {
        let err = RouteParseError::InvalidUtf8 {
            path: "/%FF".to_string(),
        };
        assert_eq!(err.to_string(), "Path '/%FF' does not decode to valid UTF-8");
    }
}
