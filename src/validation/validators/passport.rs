use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::constants::PASSPORT_MESSAGE;
use crate::validation::types::Validator;

// One or two letters followed by six to nine digits
static PASSPORT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}\d{6,9}$")
        .expect("Failed to compile passport regex")
});

/// Accepts passport numbers made of 1-2 letters and 6-9 digits,
/// ignoring surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassportValidator {
    message: String,
}

message_override!(PassportValidator, PASSPORT_MESSAGE);

impl Validator for PassportValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }

        PASSPORT_REGEX.is_match(trimmed)
    }
}
