//! Regex-backed route table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use url::form_urlencoded;

use crate::domain::routing::{AppRoute, RouteMatch, RouteParseError, RouteTable};

/// Valid `:param` names in a route pattern.
static PARAM_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Routes the app registers for deep links, as `(route name, pattern)`.
///
/// Order matters: the first matching pattern wins.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("giftcard", "giftcard"),
    ("giftcard", "giftcard/:merchant"),
    ("shop", "shop"),
    ("shop", "shop/giftcards"),
    ("wallet", "wallet/:walletId"),
    ("buy", "buy"),
    ("swap", "swap"),
    ("settings", "settings"),
];

/// A single compiled route pattern.
///
/// Patterns are `/`-separated segments; a segment starting with `:` captures
/// exactly one path segment under that parameter name.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    name: String,
    pattern: String,
    regex: Regex,
    params: Vec<String>,
}

impl RoutePattern {
    /// Compiles a pattern such as `giftcard/:merchant`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteParseError::InvalidPattern`] for empty segments, invalid
    /// or duplicate parameter names.
    pub fn new(name: &str, pattern: &str) -> Result<Self, RouteParseError> {
        let invalid = |reason: &str| RouteParseError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = pattern.trim_matches('/');
        let mut source = String::from("^");
        let mut params: Vec<String> = Vec::new();

        for (index, segment) in trimmed.split('/').enumerate() {
            if trimmed.is_empty() {
                break;
            }
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if index > 0 {
                source.push('/');
            }

            if let Some(param) = segment.strip_prefix(':') {
                if !PARAM_NAME_REGEX.is_match(param) {
                    return Err(invalid("invalid parameter name"));
                }
                if params.iter().any(|p| p == param) {
                    return Err(invalid("duplicate parameter name"));
                }
                source.push_str(&format!("(?P<{param}>[^/]+)"));
                params.push(param.to_string());
            } else {
                source.push_str(&regex::escape(segment));
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            pattern: trimmed.to_string(),
            regex,
            params,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches a raw (still percent-encoded) path and decodes captured params.
    fn capture(
        &self,
        raw_path: &str,
    ) -> Result<Option<BTreeMap<String, String>>, RouteParseError> {
        let Some(captures) = self.regex.captures(raw_path) else {
            return Ok(None);
        };

        let mut values = BTreeMap::new();
        for param in &self.params {
            if let Some(value) = captures.name(param) {
                values.insert(param.clone(), percent_decode(value.as_str(), raw_path)?);
            }
        }

        Ok(Some(values))
    }
}

/// Route table matching paths against an ordered list of patterns.
#[derive(Debug, Clone)]
pub struct PatternRouteTable {
    patterns: Vec<RoutePattern>,
}

impl PatternRouteTable {
    /// Builds a table from `(route name, pattern)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RouteParseError::InvalidPattern`] if any pattern is invalid.
    pub fn new(routes: &[(&str, &str)]) -> Result<Self, RouteParseError> {
        let patterns = routes
            .iter()
            .map(|(name, pattern)| RoutePattern::new(name, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }
}

impl Default for PatternRouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTES).expect("default route patterns are valid")
    }
}

impl RouteTable for PatternRouteTable {
    fn parse_path(&self, path: &str) -> Result<Option<RouteMatch>, RouteParseError> {
        let without_fragment = path.split('#').next().unwrap_or(path);
        let (raw_path, query) = match without_fragment.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (without_fragment, None),
        };

        validate_escapes(raw_path)?;
        let raw_path = raw_path.trim_matches('/');

        for pattern in &self.patterns {
            let Some(path_params) = pattern.capture(raw_path)? else {
                continue;
            };

            let mut params = query.map(parse_query).unwrap_or_default();
            params.extend(path_params);

            return Ok(Some(RouteMatch::single(AppRoute::from_parts(
                pattern.name(),
                params,
            ))));
        }

        Ok(None)
    }
}

/// Parses a query string; the first occurrence of a key wins.
fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    params
}

/// Rejects any `%` not followed by two hex digits.
fn validate_escapes(path: &str) -> Result<(), RouteParseError> {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escaped = bytes.get(i + 1..i + 3);
            if !escaped.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                return Err(RouteParseError::MalformedEncoding {
                    path: path.to_string(),
                    position: i,
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Decodes one captured segment. Escapes are already validated.
fn percent_decode(raw: &str, path: &str) -> Result<String, RouteParseError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteParseError::InvalidUtf8 {
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::GiftCardParams;

    fn table() -> PatternRouteTable {
        PatternRouteTable::default()
    }

    fn first_route(path: &str) -> Option<AppRoute> {
        table()
            .parse_path(path)
            .unwrap()
            .and_then(|m| m.first().cloned())
    }

    #[test]
    fn test_gift_card_query_param() {
        assert_eq!(
            first_route("/giftcard?merchant=Amazon"),
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Amazon".to_string())
            }))
        );
    }

    #[test]
    fn test_gift_card_path_param_is_decoded() {
        assert_eq!(
            first_route("/giftcard/Home%20Depot"),
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Home Depot".to_string())
            }))
        );
    }

    #[test]
    fn test_path_param_overrides_query() {
        assert_eq!(
            first_route("giftcard/Uber?merchant=Lyft"),
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Uber".to_string())
            }))
        );
    }

    #[test]
    fn test_gift_card_without_merchant() {
        assert_eq!(
            first_route("/giftcard"),
            Some(AppRoute::GiftCard(GiftCardParams::default()))
        );
    }

    #[test]
    fn test_query_plus_decodes_to_space() {
        assert_eq!(
            first_route("/giftcard?merchant=Home+Depot"),
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Home Depot".to_string())
            }))
        );
    }

    #[test]
    fn test_first_query_value_wins() {
        assert_eq!(
            first_route("/giftcard?merchant=Amazon&merchant=Uber"),
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Amazon".to_string())
            }))
        );
    }

    #[test]
    fn test_shop_routes() {
        assert_eq!(first_route("/shop"), Some(AppRoute::Shop));
        assert_eq!(first_route("/shop/giftcards/"), Some(AppRoute::Shop));
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(first_route("/shop#top"), Some(AppRoute::Shop));
    }

    #[test]
    fn test_other_route() {
        match first_route("/wallet/abc123") {
            Some(AppRoute::Other { name, params }) => {
                assert_eq!(name, "wallet");
                assert_eq!(params.get("walletId").map(String::as_str), Some("abc123"));
            }
            other => panic!("unexpected route {other:?}"),
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(table().parse_path("/nowhere").unwrap(), None);
        assert_eq!(table().parse_path("").unwrap(), None);
    }

    #[test]
    fn test_external_url_is_not_found() {
        assert_eq!(table().parse_path("https://example.com").unwrap(), None);
        assert_eq!(
            table()
                .parse_path("https://example.com/giftcard?merchant=Amazon")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_malformed_escape_is_error() {
        let err = table().parse_path("/%%%invalid").unwrap_err();

        assert_eq!(
            err,
            RouteParseError::MalformedEncoding {
                path: "/%%%invalid".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_truncated_escape_is_error() {
        assert!(matches!(
            table().parse_path("/giftcard/Amazon%2"),
            Err(RouteParseError::MalformedEncoding { .. })
        ));
    }

    #[test]
    fn test_escapes_are_validated_before_matching() {
        assert!(matches!(
            table().parse_path("/nowhere/%zz"),
            Err(RouteParseError::MalformedEncoding { position: 9, .. })
        ));
        assert!(matches!(
            table().parse_path("/giftcard/%4"),
            Err(RouteParseError::MalformedEncoding { position: 10, .. })
        ));
    }

    #[test]
    fn test_multibyte_merchant_is_decoded() {
        let route = first_route("/giftcard/Caf%C3%A9%20Nero");
        assert_eq!(
            route,
            Some(AppRoute::GiftCard(GiftCardParams {
                merchant: Some("Café Nero".to_string())
            }))
        );
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        assert!(matches!(
            table().parse_path("/giftcard/%FF%FE"),
            Err(RouteParseError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(matches!(
            PatternRouteTable::new(&[("bad", "giftcard/:1merchant")]),
            Err(RouteParseError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PatternRouteTable::new(&[("bad", "a/:id/:id")]),
            Err(RouteParseError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PatternRouteTable::new(&[("bad", "a//b")]),
            Err(RouteParseError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let table = PatternRouteTable::new(&[("promo", "promo.v2")]).unwrap();

        assert!(table.parse_path("/promo.v2").unwrap().is_some());
        assert!(table.parse_path("/promoXv2").unwrap().is_none());
    }

    #[test]
    fn test_default_patterns_listed() {
        let table = table();
        assert_eq!(table.patterns().len(), DEFAULT_ROUTES.len());
        assert_eq!(table.patterns()[1].pattern(), "giftcard/:merchant");
        assert_eq!(table.patterns()[1].name(), "giftcard");
    }
}
