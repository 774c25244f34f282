//! # Memodeck Effects
//!
//! Production implementations of the effect traits in `memodeck-core`.
//! Mock handlers do not belong here; tests use `memodeck-testkit`.

pub mod storage;

pub use storage::FileSettingsStore;
