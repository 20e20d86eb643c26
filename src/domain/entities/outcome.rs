//! Resolution results handed back to the caller.

use serde::Serialize;
use serde_json::Value;

use super::GiftCardConfig;

/// In-app screen a resolution can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    /// Purchase flow for a single gift card.
    BuyGiftCard,
    /// Gift-card category listing.
    ShopHome,
}

impl Screen {
    /// Name of the navigator stack that owns the screen.
    pub fn navigator(self) -> &'static str {
        match self {
            Screen::BuyGiftCard => "GiftCard",
            Screen::ShopHome => "Shop",
        }
    }

    /// Screen name inside its navigator.
    pub fn name(self) -> &'static str {
        match self {
            Screen::BuyGiftCard => "BuyGiftCard",
            Screen::ShopHome => "Home",
        }
    }
}

/// What the caller should do with a link.
///
/// Exactly one variant is produced per resolution; navigation and external
/// opening are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    NavigateToDomain {
        record: GiftCardConfig,
        screen: Screen,
    },
    NavigateToFallbackScreen {
        screen: Screen,
    },
    OpenExternal {
        url: String,
        use_in_app_browser: bool,
    },
    NoAction,
}

impl ResolutionOutcome {
    /// Short label used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionOutcome::NavigateToDomain { .. } => "navigate_to_domain",
            ResolutionOutcome::NavigateToFallbackScreen { .. } => "navigate_to_fallback_screen",
            ResolutionOutcome::OpenExternal { .. } => "open_external",
            ResolutionOutcome::NoAction => "no_action",
        }
    }
}

/// Diagnostic recorded when a link could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDiagnostic {
    pub message: String,
    /// Serialized parse error.
    pub detail: Value,
}

impl LinkDiagnostic {
    /// Renders the diagnostic as a single log entry.
    pub fn log_line(&self) -> String {
        format!("{} ({})", self.message, self.detail)
    }
}

/// Outcome of one resolution plus the diagnostic the caller should log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub outcome: ResolutionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<LinkDiagnostic>,
}

impl Resolution {
    pub fn new(outcome: ResolutionOutcome) -> Self {
        Self {
            outcome,
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(outcome: ResolutionOutcome, diagnostic: Option<LinkDiagnostic>) -> Self {
        Self {
            outcome,
            diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_screen_targets() {
        assert_eq!(Screen::BuyGiftCard.navigator(), "GiftCard");
        assert_eq!(Screen::BuyGiftCard.name(), "BuyGiftCard");
        assert_eq!(Screen::ShopHome.navigator(), "Shop");
        assert_eq!(Screen::ShopHome.name(), "Home");
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let outcome = ResolutionOutcome::OpenExternal {
            url: "https://example.com".to_string(),
            use_in_app_browser: true,
        };

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["action"], "open_external");
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["use_in_app_browser"], true);
        assert_eq!(outcome.kind(), "open_external");
    }

    #[test]
    fn test_no_action_serialization() {
        let json = serde_json::to_value(ResolutionOutcome::NoAction).unwrap();
        assert_eq!(json, json!({"action": "no_action"}));
    }

    #[test]
    fn test_resolution_omits_missing_diagnostic() {
        let resolution = Resolution::new(ResolutionOutcome::NavigateToFallbackScreen {
            screen: Screen::ShopHome,
        });

        let json = serde_json::to_value(&resolution).unwrap();

        assert_eq!(json["outcome"]["action"], "navigate_to_fallback_screen");
        assert_eq!(json["outcome"]["screen"], "ShopHome");
        assert!(json.get("diagnostic").is_none());
    }

    #[test]
    fn test_diagnostic_log_line_contains_detail() {
        let diagnostic = LinkDiagnostic {
            message: "Something went wrong parsing offer URL: app://open/%%".to_string(),
            detail: json!({"kind": "malformed_encoding"}),
        };

        let line = diagnostic.log_line();

        assert!(line.starts_with("Something went wrong parsing offer URL"));
        assert!(line.contains("malformed_encoding"));
    }
}
