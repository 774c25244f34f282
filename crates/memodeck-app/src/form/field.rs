//! Observable value cell with validation and touch state.

use std::sync::Arc;

use futures_signals::signal::{Mutable, Signal};

/// Validation rule: a pure, total function from a value to an optional
/// error message.
pub type Validator<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// A form field backed by a string value.
pub type TextField = Field<String>;

/// An observable field: value, touch flag, and error-as-data.
///
/// The error is recomputed from the value on every [`set_value`] and never
/// mutated independently; validation failures are data for the frontend to
/// render, not control flow. Clones share the same cells, so a field handle
/// can be passed to an input widget while the owning store keeps reading it.
///
/// [`set_value`]: Field::set_value
pub struct Field<T: Clone> {
    value: Mutable<T>,
    is_touched: Mutable<bool>,
    error: Mutable<Option<String>>,
    validator: Option<Validator<T>>,
}

impl<T: Clone> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            is_touched: self.is_touched.clone(),
            error: self.error.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<T: Clone> Field<T> {
    /// Field with no validation rule.
    pub fn new(initial: T) -> Self {
        Self {
            value: Mutable::new(initial),
            is_touched: Mutable::new(false),
            error: Mutable::new(None),
            validator: None,
        }
    }

    /// Field validated by `validator` on every value change.
    pub fn validated(
        initial: T,
        validator: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: Mutable::new(initial),
            is_touched: Mutable::new(false),
            error: Mutable::new(None),
            validator: Some(Arc::new(validator)),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value.get_cloned()
    }

    /// Whether the user has interacted with the field.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.is_touched.get()
    }

    /// Current validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.get_cloned()
    }

    /// Store `new_value`, mark the field touched, and revalidate.
    pub fn set_value(&self, new_value: T) {
        let error = self.run_validator(&new_value);
        self.value.set(new_value);
        self.is_touched.set(true);
        self.error.set(error);
    }

    /// Mark the field touched without changing its value (blur equivalent).
    pub fn touch(&self) {
        self.is_touched.set(true);
    }

    /// Signal of the field's value.
    pub fn value_signal(&self) -> impl Signal<Item = T> {
        self.value.signal_cloned()
    }

    /// Signal of the field's validation error.
    pub fn error_signal(&self) -> impl Signal<Item = Option<String>> {
        self.error.signal_cloned()
    }

    /// Adopt `value` without touching the field, revalidating it.
    ///
    /// Used when restoring a stored value at construction time.
    pub(crate) fn restore(&self, value: T) {
        let error = self.run_validator(&value);
        self.value.set(value);
        self.error.set(error);
    }

    fn run_validator(&self, value: &T) -> Option<String> {
        self.validator.as_ref().and_then(|validate| validate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(value: &String) -> Option<String> {
        if value.trim().is_empty() {
            Some("value is required".to_string())
        } else {
            None
        }
    }

    #[test]
    fn test_fresh_field_untouched_without_error() {
        let field = TextField::validated(String::new(), non_empty);
        assert!(!field.is_touched());
        assert_eq!(field.error(), None);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_set_value_touches_and_validates() {
        let field = TextField::validated(String::new(), non_empty);
        field.set_value("  ".to_string());
        assert!(field.is_touched());
        assert_eq!(field.error(), Some("value is required".to_string()));
    }

    #[test]
    fn test_valid_value_clears_error() {
        let field = TextField::validated(String::new(), non_empty);
        field.set_value(" ".to_string());
        assert!(field.error().is_some());
        field.set_value("hola".to_string());
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_touch_does_not_change_value_or_error() {
        let field = TextField::validated(String::new(), non_empty);
        field.touch();
        assert!(field.is_touched());
        assert_eq!(field.value(), "");
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let field = Field::new(1u32);
        let handle = field.clone();
        handle.set_value(5);
        assert_eq!(field.value(), 5);
        assert!(field.is_touched());
    }
}
