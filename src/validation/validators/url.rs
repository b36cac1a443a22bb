use ::url::Url;

use crate::validation::constants::URL_MESSAGE;
use crate::validation::types::Validator;

/// Accepts absolute `http` and `https` URLs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlValidator {
    message: String,
}

message_override!(UrlValidator, URL_MESSAGE);

impl Validator for UrlValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }

        // The parser lowercases the scheme, and relative input fails with an error
        match Url::parse(value) {
            Ok(url) => matches!(url.scheme(), "http" | "https"),
            Err(_) => false,
        }
    }
}
