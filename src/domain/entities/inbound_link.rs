//! Raw deep link presented to the app.

use serde::{Deserialize, Serialize};

/// A link the user tapped, together with how the card asked it to be opened.
///
/// The URL may be empty, may carry the application deep-link prefix, or may
/// be an ordinary web address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundLink {
    pub url: String,
    /// Open external URLs in the embedded browser instead of the system one.
    #[serde(default)]
    pub open_in_web_view: bool,
}

impl InboundLink {
    pub fn new(url: impl Into<String>, open_in_web_view: bool) -> Self {
        Self {
            url: url.into(),
            open_in_web_view,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_link_defaults_to_system_browser() {
        let link: InboundLink = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();

        assert_eq!(link.url, "https://example.com");
        assert!(!link.open_in_web_view);
    }

    #[test]
    fn test_inbound_link_is_empty() {
        assert!(InboundLink::default().is_empty());
        assert!(!InboundLink::new("app://open/shop", false).is_empty());
    }
}
