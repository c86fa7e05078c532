//! Error-key resolution against a borrowed validation store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use formprops_model::{ValidationError, ValidationErrors};
use tracing::trace;

/// Resolves error keys to display text for one render pass.
///
/// The binder borrows exactly one store and memoizes by key, so a pass over
/// a fresh store always starts with a fresh memo.
#[derive(Debug)]
pub struct ErrorBinder<'a> {
    errors: &'a ValidationErrors,
    memo: RefCell<HashMap<String, Option<Rc<str>>>>,
}

impl<'a> ErrorBinder<'a> {
    pub fn new(errors: &'a ValidationErrors) -> Self {
        Self {
            errors,
            memo: RefCell::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &'a ValidationErrors {
        self.errors
    }

    /// Joined message text for `error_key`, or `None` when there is nothing
    /// to show: no key, an empty key, no entry, or messages that join to
    /// blank text.
    pub fn resolve(&self, error_key: Option<&str>) -> Option<Rc<str>> {
        let key = error_key.filter(|key| !key.is_empty())?;
        if let Some(cached) = self.memo.borrow().get(key) {
            return cached.clone();
        }
        let resolved = self
            .errors
            .get(key)
            .map(ValidationError::joined)
            .filter(|text| !text.trim().is_empty())
            .map(Rc::<str>::from);
        trace!(key, found = resolved.is_some(), "resolved error key");
        self.memo
            .borrow_mut()
            .insert(key.to_string(), resolved.clone());
        resolved
    }

    pub fn is_invalid(&self, error_key: Option<&str>) -> bool {
        self.resolve(error_key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_keys_resolve_to_nothing() {
        let errors: ValidationErrors = [("title", "bad")].into_iter().collect();
        let binder = ErrorBinder::new(&errors);
        assert_eq!(binder.resolve(None), None);
        assert_eq!(binder.resolve(Some("")), None);
        assert_eq!(binder.resolve(Some("body")), None);
    }

    #[test]
    fn single_and_list_messages_are_joined() {
        let errors: ValidationErrors = [
            ("title", ValidationError::from("bad")),
            ("body", ValidationError::from(vec!["bad", "worse"])),
        ]
        .into_iter()
        .collect();
        let binder = ErrorBinder::new(&errors);
        assert_eq!(binder.resolve(Some("title")).as_deref(), Some("bad"));
        assert_eq!(binder.resolve(Some("body")).as_deref(), Some("bad worse"));
    }

    #[test]
    fn empty_message_list_is_no_error() {
        let errors: ValidationErrors = [("tags", Vec::<String>::new())].into_iter().collect();
        let binder = ErrorBinder::new(&errors);
        assert!(!binder.is_invalid(Some("tags")));
    }

    #[test]
    fn blank_messages_are_no_error() {
        let errors = ValidationErrors::from_json(r#"{"title":"","body":[""],"tags":[" ", ""]}"#)
            .expect("parse errors");
        let binder = ErrorBinder::new(&errors);
        for key in ["title", "body", "tags"] {
            assert_eq!(binder.resolve(Some(key)), None, "{key}");
        }
    }

    #[test]
    fn repeated_lookups_are_memoized() {
        let errors: ValidationErrors = [("title", "bad")].into_iter().collect();
        let binder = ErrorBinder::new(&errors);
        let first = binder.resolve(Some("title")).expect("message");
        let second = binder.resolve(Some("title")).expect("message");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(binder.memo.borrow().len(), 1);
    }
}
