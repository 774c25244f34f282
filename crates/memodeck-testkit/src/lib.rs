//! # Memodeck Testkit
//!
//! Fake effect handlers for exercising the app core without real storage,
//! transport, or a host shell:
//!
//! - [`MemorySettingsStore`] / [`BrokenSettingsStore`]: settings storage
//! - [`ScriptedCatalogApi`]: catalog transport with invocation counters and
//!   an optional [`Gate`] to hold responses until the test releases them
//! - [`RecordingPlatform`]: host shell that records clipboard and dialog use
//! - [`fixtures`]: payload builders

pub mod api;
pub mod fixtures;
pub mod platform;
pub mod storage;

pub use api::{gate, Gate, GateHandle, ScriptedCatalogApi};
pub use platform::RecordingPlatform;
pub use storage::{BrokenSettingsStore, MemorySettingsStore};
