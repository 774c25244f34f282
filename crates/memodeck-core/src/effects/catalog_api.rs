//! Catalog transport interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{DeckCatalogResponse, DeckCategoryResponse};
use crate::errors::FetchError;

/// Response to a share-link request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDeckResponse {
    /// Stable identifier embedded in the share deep link.
    pub share_id: String,
}

/// Asynchronous catalog transport.
///
/// Implementations are opaque to the core: a network client, a local
/// replica, or a script in tests. All failures surface by returning
/// [`FetchError`]; the core never retries on its own.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the public deck catalog.
    async fn deck_catalog(&self) -> Result<DeckCatalogResponse, FetchError>;

    /// Fetch the deck category list.
    async fn deck_categories(&self) -> Result<DeckCategoryResponse, FetchError>;

    /// Request a stable share identifier for a deck.
    async fn share_deck(&self, deck_id: i64) -> Result<ShareDeckResponse, FetchError>;
}
