//! Core types used throughout the validation system

use std::fmt;
use std::sync::Arc;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::validators::{
    CreditCardValidator, EmailValidator, PassportValidator, PasswordValidator, RequiredValidator,
    UrlValidator,
};

/// A stateless check applied to the text of a field.
///
/// Implementations must be pure: the same input always yields the same
/// answer, nothing is mutated, and no input (empty, whitespace, garbage)
/// makes `validate` panic. All failure information is carried by
/// [`Validator::message`].
pub trait Validator: Send + Sync + fmt::Debug {
    /// The message shown when a value is rejected
    fn message(&self) -> &str;

    /// Returns true if the value is accepted
    fn validate(&self, value: &str) -> bool;

    /// Validates a value that may be absent. Absence behaves like an empty string.
    fn validate_optional(&self, value: Option<&str>) -> bool {
        self.validate(value.unwrap_or_default())
    }

    /// Runs the check and pairs the answer with the message to display
    fn check(&self, value: &str) -> ValidationOutcome {
        if self.validate(value) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(self.message())
        }
    }
}

/// The result of checking a value: a flag and the message to display.
///
/// `error_message` is empty whenever `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error_message: String,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error_message: message.to_owned(),
        }
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}

/// Tag naming each built-in validator, used by form definitions and menus
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    #[display("Required")]
    Required,
    #[display("Email")]
    Email,
    #[display("Password")]
    Password,
    #[display("URL")]
    Url,
    #[display("Passport number")]
    Passport,
    #[display("Credit card")]
    CreditCard,
}

impl ValidatorKind {
    /// Builds a shareable validator with its default message
    pub fn build(self) -> Arc<dyn Validator> {
        self.build_with_message(None)
    }

    /// Builds a shareable validator, replacing the default message when one is given
    pub fn build_with_message(self, message: Option<String>) -> Arc<dyn Validator> {
        match (self, message) {
            (Self::Required, None) => Arc::new(RequiredValidator::new()),
            (Self::Required, Some(m)) => Arc::new(RequiredValidator::with_message(m)),
            (Self::Email, None) => Arc::new(EmailValidator::new()),
            (Self::Email, Some(m)) => Arc::new(EmailValidator::with_message(m)),
            (Self::Password, None) => Arc::new(PasswordValidator::new()),
            (Self::Password, Some(m)) => Arc::new(PasswordValidator::with_message(m)),
            (Self::Url, None) => Arc::new(UrlValidator::new()),
            (Self::Url, Some(m)) => Arc::new(UrlValidator::with_message(m)),
            (Self::Passport, None) => Arc::new(PassportValidator::new()),
            (Self::Passport, Some(m)) => Arc::new(PassportValidator::with_message(m)),
            (Self::CreditCard, None) => Arc::new(CreditCardValidator::new()),
            (Self::CreditCard, Some(m)) => Arc::new(CreditCardValidator::with_message(m)),
        }
    }
}
