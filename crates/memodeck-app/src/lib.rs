//! # Memodeck App
//!
//! Portable headless application core for the memodeck deck catalog.
//!
//! Frontends construct a [`DeckCatalogStore`] over injected effect handlers
//! and read from it; the store owns the reactive plumbing:
//!
//! - [`form`]: observable fields with validation and optional persistence
//! - [`fetch`]: single-flight fetch memoization and observable load
//!   projections
//! - [`catalog`]: the catalog store with derived, filtered deck views
//! - [`share`]: the share-link workflow
//!
//! All state cells are `futures-signals` mutables, so every value can be
//! read synchronously or subscribed to as a signal.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod form;
pub mod share;

pub use catalog::{filter_decks, CatalogFilters, DeckCatalogStore, LANGUAGE_FILTER_KEY};
pub use config::AppConfig;
pub use fetch::{FetchCache, LoadProjection, Loadable};
pub use form::{Field, PersistedField, TextField};
pub use share::{share_link, ShareDeckState};
