//! Marketing content card that carries a promotional offer.

use serde::{Deserialize, Serialize};

use super::InboundLink;

/// Layout family of a content card.
///
/// Only captioned and classic cards carry a title and a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCardKind {
    Captioned,
    Classic,
    ImageOnly,
    Control,
}

/// A content card as delivered by the campaign backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub id: String,
    pub kind: ContentCardKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub open_url_in_web_view: bool,
}

impl ContentCard {
    /// Link opened when the card's arrow is pressed. A card without a URL
    /// yields an empty link.
    pub fn inbound_link(&self) -> InboundLink {
        InboundLink::new(self.url.clone().unwrap_or_default(), self.open_url_in_web_view)
    }

    fn has_text(&self) -> bool {
        matches!(
            self.kind,
            ContentCardKind::Captioned | ContentCardKind::Classic
        )
    }
}

/// Presentation data derived from a [`ContentCard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferCardView {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl OfferCardView {
    pub fn from_card(card: &ContentCard) -> Self {
        let (title, description) = if card.has_text() {
            (
                card.title.clone().unwrap_or_default(),
                card.description.clone().unwrap_or_default(),
            )
        } else {
            (String::new(), String::new())
        };

        let image_uri = card.image.as_ref().filter(|uri| !uri.is_empty()).cloned();

        Self {
            title,
            description,
            image_uri,
        }
    }
}
