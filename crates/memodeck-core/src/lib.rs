//! # Memodeck Core
//!
//! Interface layer for the memodeck catalog application core.
//!
//! This crate defines the effect traits the app core calls and the shared
//! types exchanged across crate boundaries:
//!
//! - [`effects`]: storage, host platform, and catalog transport traits.
//!   Production handlers live in `memodeck-effects` and the embedding
//!   frontend; test fakes live in `memodeck-testkit`.
//! - [`catalog`]: deck and category payload types.
//! - [`errors`]: error types shared across the workspace.
//!
//! Nothing in this crate performs I/O.

pub mod catalog;
pub mod effects;
pub mod errors;

pub use catalog::{
    Deck, DeckCatalogResponse, DeckCategory, DeckCategoryResponse, LanguageFilter,
};
pub use effects::{CatalogApi, PlatformEffects, SettingsStore, ShareDeckResponse};
pub use errors::{FetchError, PlatformError, ShareError, StorageError};
