use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::constants::EMAIL_MESSAGE;
use crate::validation::types::Validator;

// Loose syntactic check: something@something.something, no spaces, a single '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .expect("Failed to compile email regex")
});

/// Accepts addresses of the form `local@domain.tld`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailValidator {
    message: String,
}

message_override!(EmailValidator, EMAIL_MESSAGE);

impl Validator for EmailValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }

        EMAIL_REGEX.is_match(value)
    }
}
