//! Scripted catalog transport.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use memodeck_core::catalog::{DeckCatalogResponse, DeckCategoryResponse};
use memodeck_core::effects::{CatalogApi, ShareDeckResponse};
use memodeck_core::errors::FetchError;

/// Create a latch pair: the [`GateHandle`] releases, the [`Gate`] waits.
pub fn gate() -> (GateHandle, Gate) {
    let (tx, rx) = watch::channel(false);
    (GateHandle { tx }, Gate { rx })
}

/// Test-side handle that releases every waiter on the paired [`Gate`].
pub struct GateHandle {
    tx: watch::Sender<bool>,
}

impl GateHandle {
    /// Release all current and future waiters.
    pub fn release(&self) {
        let _ = self.tx.send(true);
    }
}

/// Latch a scripted response waits on before resolving.
#[derive(Clone)]
pub struct Gate {
    rx: watch::Receiver<bool>,
}

impl Gate {
    /// Wait until the paired handle releases (or is dropped).
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        let _ = rx.wait_for(|released| *released).await;
    }
}

/// Catalog transport that serves scripted responses and counts invocations.
///
/// Responses are fixed at construction; an optional gate holds the catalog
/// response until the test releases it, which makes pending-state assertions
/// deterministic.
pub struct ScriptedCatalogApi {
    catalog: Result<DeckCatalogResponse, FetchError>,
    categories: Result<DeckCategoryResponse, FetchError>,
    share: Result<ShareDeckResponse, FetchError>,
    catalog_gate: Option<Gate>,
    catalog_calls: AtomicUsize,
    categories_calls: AtomicUsize,
    share_calls: AtomicUsize,
}

impl Default for ScriptedCatalogApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedCatalogApi {
    /// Transport answering every request with empty payloads.
    pub fn new() -> Self {
        Self {
            catalog: Ok(DeckCatalogResponse::default()),
            categories: Ok(DeckCategoryResponse::default()),
            share: Ok(ShareDeckResponse {
                share_id: "share-id".to_string(),
            }),
            catalog_gate: None,
            catalog_calls: AtomicUsize::new(0),
            categories_calls: AtomicUsize::new(0),
            share_calls: AtomicUsize::new(0),
        }
    }

    /// Script the deck-catalog response.
    pub fn with_catalog(mut self, response: DeckCatalogResponse) -> Self {
        self.catalog = Ok(response);
        self
    }

    /// Script a deck-catalog failure.
    pub fn with_catalog_error(mut self, error: FetchError) -> Self {
        self.catalog = Err(error);
        self
    }

    /// Script the category-list response.
    pub fn with_categories(mut self, response: DeckCategoryResponse) -> Self {
        self.categories = Ok(response);
        self
    }

    /// Script the share response.
    pub fn with_share_id(mut self, share_id: &str) -> Self {
        self.share = Ok(ShareDeckResponse {
            share_id: share_id.to_string(),
        });
        self
    }

    /// Script a share failure.
    pub fn with_share_error(mut self, error: FetchError) -> Self {
        self.share = Err(error);
        self
    }

    /// Hold the deck-catalog response until `gate` is released.
    pub fn with_catalog_gate(mut self, gate: Gate) -> Self {
        self.catalog_gate = Some(gate);
        self
    }

    /// Number of deck-catalog invocations so far.
    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    /// Number of category-list invocations so far.
    pub fn categories_calls(&self) -> usize {
        self.categories_calls.load(Ordering::SeqCst)
    }

    /// Number of share invocations so far.
    pub fn share_calls(&self) -> usize {
        self.share_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalogApi {
    async fn deck_catalog(&self) -> Result<DeckCatalogResponse, FetchError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.catalog_gate {
            gate.wait().await;
        }
        self.catalog.clone()
    }

    async fn deck_categories(&self) -> Result<DeckCategoryResponse, FetchError> {
        self.categories_calls.fetch_add(1, Ordering::SeqCst);
        self.categories.clone()
    }

    async fn share_deck(&self, _deck_id: i64) -> Result<ShareDeckResponse, FetchError> {
        self.share_calls.fetch_add(1, Ordering::SeqCst);
        self.share.clone()
    }
}
