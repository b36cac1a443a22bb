//! Root module for the validation system.
//! Exposes the validator contract and the built-in validators.

mod constants;
mod types;
mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use types::{ValidationOutcome, Validator, ValidatorKind};
pub use validators::{
    CreditCardValidator, EmailValidator, PassportValidator, PasswordValidator, RequiredValidator,
    UrlValidator,
};
