//! Payload builders for tests.

use memodeck_core::catalog::{Deck, DeckCatalogResponse, DeckCategory, DeckCategoryResponse};

/// Deck with the given id, language tag, and category.
pub fn deck(id: i64, language: &str, category_id: &str) -> Deck {
    Deck {
        id,
        name: format!("Deck {id}"),
        description: None,
        available_in: language.to_string(),
        category_id: category_id.to_string(),
        share_id: None,
    }
}

/// Category with the given id and name.
pub fn category(id: &str, name: &str) -> DeckCategory {
    DeckCategory {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Catalog payload from a list of decks.
pub fn catalog(decks: Vec<Deck>) -> DeckCatalogResponse {
    DeckCatalogResponse { decks }
}

/// Category payload from a list of categories.
pub fn categories(categories: Vec<DeckCategory>) -> DeckCategoryResponse {
    DeckCategoryResponse { categories }
}
