//! Deck catalog payload types.
//!
//! These mirror the transport payloads returned by the catalog API and are
//! shared between the app core and frontends. They carry no behavior beyond
//! tag mapping for [`LanguageFilter`].

use serde::{Deserialize, Serialize};

/// Language selection for the catalog, doubling as the filter value.
///
/// `Any` is the filter sentinel: it matches every deck and never appears as
/// a deck's own language tag on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageFilter {
    /// Match decks in every language.
    #[default]
    #[serde(rename = "any")]
    Any,
    /// English
    #[serde(rename = "en")]
    English,
    /// Spanish
    #[serde(rename = "es")]
    Spanish,
    /// Russian
    #[serde(rename = "ru")]
    Russian,
}

impl LanguageFilter {
    /// Wire tag for this selection.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::English => "en",
            Self::Spanish => "es",
            Self::Russian => "ru",
        }
    }

    /// Parse a wire tag. Unknown tags map to `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "any" => Some(Self::Any),
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Display name of the language, in the language itself.
    ///
    /// `Any` has no native name; the frontend supplies a localized label for
    /// it, since translation lookup lives outside the core.
    #[must_use]
    pub fn native_name(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::English => Some("English"),
            Self::Spanish => Some("Español"),
            Self::Russian => Some("Русский"),
        }
    }
}

/// A shareable learning-card deck as listed in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Catalog-wide deck identifier.
    pub id: i64,
    /// Deck title.
    pub name: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Wire tag of the language the deck content is written in.
    pub available_in: String,
    /// Owning category identifier.
    pub category_id: String,
    /// Stable share identifier, present once the deck has been shared.
    #[serde(default)]
    pub share_id: Option<String>,
}

/// A deck category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCategory {
    /// Category identifier, referenced by [`Deck::category_id`].
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Payload of the deck-catalog fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckCatalogResponse {
    /// Decks in catalog order.
    pub decks: Vec<Deck>,
}

/// Payload of the category-list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckCategoryResponse {
    /// Categories in catalog order.
    pub categories: Vec<DeckCategory>,
}
