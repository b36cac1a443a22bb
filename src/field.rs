//! A text input that re-validates its content on every change.

use std::fmt;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::validation::{ValidationOutcome, Validator};

/// Callback notified with the new outcome after each validation pass
pub type Listener = Box<dyn FnMut(&ValidationOutcome)>;

/// Returned when the content of a field is read while it is invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidInput {
    pub message: String,
}

/// Editable text bound to an optional validator.
///
/// Every change of the text runs the attached validator and publishes the
/// outcome through [`ValidatedField::is_valid`], [`ValidatedField::error_message`]
/// and the subscribed listeners. Without a validator the field is always valid.
/// A fresh field is valid with an empty message until its text first changes.
pub struct ValidatedField {
    header: String,
    placeholder: String,
    text: String,
    validator: Option<Arc<dyn Validator>>,
    outcome: ValidationOutcome,
    listeners: Vec<Listener>,
}

impl ValidatedField {
    pub fn new() -> Self {
        Self {
            header: String::new(),
            placeholder: String::new(),
            text: String::new(),
            validator: None,
            outcome: ValidationOutcome::valid(),
            listeners: Vec::new(),
        }
    }

    /// Sets the label displayed above the field
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the hint displayed while the field is empty
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Attaches a validator. The outcome is recomputed on the next text change.
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// Replaces or removes the validator without re-running it; see [`ValidatedField::revalidate`]
    pub fn set_validator(&mut self, validator: Option<Arc<dyn Validator>>) {
        self.validator = validator;
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid
    }

    pub fn error_message(&self) -> &str {
        &self.outcome.error_message
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// Registers a callback run after every validation pass
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ValidationOutcome) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the text. Validation runs only if the text actually changed,
    /// which is what the returned flag reports.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }

        self.text = text;
        self.on_text_changed();
        true
    }

    /// Appends to the text, as typing would
    pub fn push_str(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }

        self.text.push_str(input);
        self.on_text_changed();
    }

    pub fn clear(&mut self) -> bool {
        self.set_text(String::new())
    }

    /// Runs the validator against the current text and notifies listeners
    pub fn revalidate(&mut self) -> &ValidationOutcome {
        self.outcome = match &self.validator {
            None => ValidationOutcome::valid(),
            Some(validator) => validator.check(&self.text),
        };

        debug!("Field '{}' revalidated: valid={}", self.header, self.outcome.is_valid);

        for listener in self.listeners.iter_mut() {
            listener(&self.outcome);
        }

        &self.outcome
    }

    /// Returns the text if the field is currently valid
    pub fn value(&self) -> Result<&str, InvalidInput> {
        if self.outcome.is_valid {
            Ok(&self.text)
        } else {
            Err(InvalidInput {
                message: self.outcome.error_message.clone(),
            })
        }
    }

    fn on_text_changed(&mut self) {
        self.revalidate();
    }
}

impl Default for ValidatedField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("header", &self.header)
            .field("placeholder", &self.placeholder)
            .field("text", &self.text)
            .field("validator", &self.validator)
            .field("outcome", &self.outcome)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{
        EmailValidator, PasswordValidator, RequiredValidator, ValidatorKind, EMAIL_MESSAGE,
        REQUIRED_MESSAGE,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    mod without_validator {
        use super::*;

        #[test]
        fn test_fresh_field_is_valid() {
            let field = ValidatedField::new();
            assert!(field.is_valid());
            assert_eq!(field.error_message(), "");
            assert_eq!(field.text(), "");
        }

        #[test]
        fn test_any_text_is_valid() {
            let mut field = ValidatedField::new();

            for text in vec!["", "   ", "anything", "a@b"] {
                field.set_text(text);
                assert!(field.is_valid(), "Field without validator rejected {:?}", text);
                assert_eq!(field.error_message(), "");
            }
        }
    }

    mod with_validator {
        use super::*;

        #[test]
        fn test_failing_input_exposes_validator_message() {
            let mut field = ValidatedField::new().with_validator(ValidatorKind::Email.build());

            field.set_text("not-an-email");
            assert!(!field.is_valid());
            assert_eq!(field.error_message(), EMAIL_MESSAGE);

            field.set_text("a@b.c");
            assert!(field.is_valid());
            assert_eq!(field.error_message(), "");
        }

        #[test]
        fn test_overridden_message_is_exposed() {
            let validator = Arc::new(PasswordValidator::with_message("Too weak"));
            let mut field = ValidatedField::new().with_validator(validator);

            field.set_text("weak");
            assert_eq!(field.error_message(), "Too weak");
        }

        #[test]
        fn test_validator_is_not_run_before_first_change() {
            let field = ValidatedField::new().with_validator(Arc::new(RequiredValidator::new()));
            assert!(field.is_valid());
        }

        #[test]
        fn test_clear_triggers_validation() {
            let mut field = ValidatedField::new().with_validator(Arc::new(RequiredValidator::new()));

            field.set_text("John");
            assert!(field.is_valid());

            field.clear();
            assert!(!field.is_valid());
            assert_eq!(field.error_message(), REQUIRED_MESSAGE);
        }

        #[test]
        fn test_push_str_validates_the_whole_text() {
            let mut field = ValidatedField::new().with_validator(Arc::new(EmailValidator::new()));

            field.push_str("user@");
            assert!(!field.is_valid());

            field.push_str("example.com");
            assert!(field.is_valid());
            assert_eq!(field.text(), "user@example.com");
        }

        #[test]
        fn test_detaching_validator_then_revalidating() {
            let mut field = ValidatedField::new().with_validator(Arc::new(RequiredValidator::new()));
            field.set_text("x");
            field.clear();
            assert!(!field.is_valid());

            field.set_validator(None);
            assert!(!field.is_valid(), "Detaching must not re-run validation by itself");

            field.revalidate();
            assert!(field.is_valid());
            assert_eq!(field.error_message(), "");
        }

        #[test]
        fn test_shared_validator() {
            let validator = ValidatorKind::Required.build();
            let mut first = ValidatedField::new().with_validator(Arc::clone(&validator));
            let mut second = ValidatedField::new().with_validator(validator);

            first.set_text("filled");
            second.set_text(" ");

            assert!(first.is_valid());
            assert!(!second.is_valid());
        }

        #[test]
        fn test_value() {
            let mut field = ValidatedField::new().with_validator(ValidatorKind::Passport.build());

            field.set_text("AB123456");
            assert_eq!(field.value(), Ok("AB123456"));

            field.set_text("AB12");
            let err = field.value().unwrap_err();
            assert_eq!(err.to_string(), field.error_message());
        }
    }

    mod listeners {
        use super::*;

        #[test]
        fn test_listener_receives_each_outcome() {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&seen);

            let mut field = ValidatedField::new().with_validator(ValidatorKind::Required.build());
            field.subscribe(move |outcome| sink.borrow_mut().push(outcome.is_valid));

            field.set_text("a");
            field.set_text("");
            field.set_text("b");

            assert_eq!(*seen.borrow(), vec![true, false, true]);
        }

        #[test]
        fn test_set_text_reports_change() {
            let mut field = ValidatedField::new();

            assert!(field.set_text("a"));
            assert!(!field.set_text("a"));
            assert!(field.clear());
            assert!(!field.clear());
        }

        #[test]
        fn test_resubmitting_unchanged_text_notifies_once() {
            let count = Rc::new(RefCell::new(0));
            let sink = Rc::clone(&count);

            let mut field = ValidatedField::new().with_validator(ValidatorKind::Required.build());
            field.subscribe(move |_| *sink.borrow_mut() += 1);

            for answer in vec!["", "John", "John"] {
                if !field.set_text(answer) {
                    field.revalidate();
                }
            }

            assert_eq!(*count.borrow(), 3);
            assert!(field.is_valid());
        }

        #[test]
        fn test_same_text_does_not_notify() {
            let count = Rc::new(RefCell::new(0));
            let sink = Rc::clone(&count);

            let mut field = ValidatedField::new();
            field.subscribe(move |_| *sink.borrow_mut() += 1);

            field.set_text("same");
            field.set_text("same");
            field.push_str("");

            assert_eq!(*count.borrow(), 1);
        }
    }

    #[test]
    fn test_header_and_placeholder() {
        let field = ValidatedField::new()
            .with_header("Email")
            .with_placeholder("you@example.com");

        assert_eq!(field.header(), "Email");
        assert_eq!(field.placeholder(), "you@example.com");
    }
}
