//! Deck catalog store and filtering.

pub mod store;

pub use store::{filter_decks, CatalogFilters, DeckCatalogStore, LANGUAGE_FILTER_KEY};
