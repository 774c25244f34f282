//! Observable store over the public deck catalog.

use std::sync::Arc;

use futures_signals::signal::Mutable;
use tracing::debug;

use memodeck_core::catalog::{Deck, DeckCatalogResponse, DeckCategoryResponse, LanguageFilter};
use memodeck_core::effects::{CatalogApi, SettingsStore};

use crate::fetch::{FetchCache, LoadProjection, Loadable};
use crate::form::{Field, PersistedField};

/// Storage key for the catalog language-filter selection.
pub const LANGUAGE_FILTER_KEY: &str = "catalogLn";

/// Filter selections over the deck catalog.
pub struct CatalogFilters {
    /// Language selection; survives restarts.
    pub language: PersistedField<LanguageFilter>,
    /// Selected category id; the empty string selects all categories.
    pub category_id: Field<String>,
}

/// Decks passing both filter predicates, in catalog order.
///
/// A deck passes when the language filter is `Any` or equals the deck's
/// language tag, and the category filter is empty or equals the deck's
/// category id. Pure projection: no deck is mutated, order is preserved.
#[must_use]
pub fn filter_decks(decks: &[Deck], language: LanguageFilter, category_id: &str) -> Vec<Deck> {
    decks
        .iter()
        .filter(|deck| {
            if language != LanguageFilter::Any && deck.available_in != language.tag() {
                return false;
            }
            if !category_id.is_empty() && deck.category_id != category_id {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Observable store over the deck catalog.
///
/// Owned by whichever frontend context constructs it; the store is the sole
/// mutator of its filter fields and projections. The fetch caches live as
/// long as the store, so re-entering the catalog screen re-projects the
/// same completed fetches instead of hitting the transport again.
pub struct DeckCatalogStore {
    api: Arc<dyn CatalogApi>,
    decks_cache: FetchCache<DeckCatalogResponse>,
    categories_cache: FetchCache<DeckCategoryResponse>,
    decks: Mutable<Option<LoadProjection<DeckCatalogResponse>>>,
    categories: Mutable<Option<LoadProjection<DeckCategoryResponse>>>,
    /// Filter selections, readable and writable by the frontend.
    pub filters: CatalogFilters,
}

impl DeckCatalogStore {
    /// Store over the given transport and settings storage.
    pub fn new(api: Arc<dyn CatalogApi>, settings: Arc<dyn SettingsStore>) -> Self {
        let language = PersistedField::new(
            Field::new(LanguageFilter::Any),
            settings,
            LANGUAGE_FILTER_KEY,
        );
        Self {
            api,
            decks_cache: FetchCache::new(),
            categories_cache: FetchCache::new(),
            decks: Mutable::new(None),
            categories: Mutable::new(None),
            filters: CatalogFilters {
                language,
                category_id: Field::new(String::new()),
            },
        }
    }

    /// Issue the catalog fetches and (re)build the load projections.
    ///
    /// Safe to call on every screen entry: the caches absorb repeats, so
    /// the transport sees at most one request per collection per store
    /// lifetime. Each call does construct fresh projections, which settle
    /// to the same terminal state when the underlying fetch is already
    /// done.
    pub fn load(&self) {
        debug!("loading deck catalog");

        let decks_fetch = {
            let api = Arc::clone(&self.api);
            self.decks_cache
                .fetch(move || async move { api.deck_catalog().await })
        };
        self.decks.set(Some(LoadProjection::spawn(decks_fetch)));

        let categories_fetch = {
            let api = Arc::clone(&self.api);
            self.categories_cache
                .fetch(move || async move { api.deck_categories().await })
        };
        self.categories
            .set(Some(LoadProjection::spawn(categories_fetch)));
    }

    /// Deck projection, present once [`load`](Self::load) has been called.
    #[must_use]
    pub fn decks(&self) -> Option<LoadProjection<DeckCatalogResponse>> {
        self.decks.get_cloned()
    }

    /// Category projection, present once [`load`](Self::load) has been
    /// called.
    #[must_use]
    pub fn categories(&self) -> Option<LoadProjection<DeckCategoryResponse>> {
        self.categories.get_cloned()
    }

    /// Decks passing the current filters, in catalog order.
    ///
    /// Empty until the deck fetch fulfills. The live filter values are read
    /// on every call, so the result can never be stale with respect to a
    /// filter change made before it.
    #[must_use]
    pub fn filtered_decks(&self) -> Vec<Deck> {
        let Some(projection) = self.decks.get_cloned() else {
            return Vec::new();
        };
        let Loadable::Fulfilled(catalog) = projection.state() else {
            return Vec::new();
        };
        filter_decks(
            &catalog.decks,
            self.filters.language.value(),
            &self.filters.category_id.value(),
        )
    }
}
