//! Observable form fields.
//!
//! A [`Field`] is a single mutable value cell with validation and touch
//! tracking; a [`PersistedField`] decorates one with load-on-construct and
//! write-through persistence against an injected settings store.

pub mod field;
pub mod persisted;

pub use field::{Field, TextField, Validator};
pub use persisted::PersistedField;
