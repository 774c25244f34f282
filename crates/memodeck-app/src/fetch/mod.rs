//! Asynchronous loading primitives.
//!
//! [`FetchCache`] deduplicates fetches (single-flight); [`LoadProjection`]
//! turns a fetch into an observable [`Loadable`] tri-state the frontend can
//! read or subscribe to.

pub mod cache;
pub mod projection;

pub use cache::{FetchCache, SharedFetch};
pub use projection::{LoadProjection, Loadable};
