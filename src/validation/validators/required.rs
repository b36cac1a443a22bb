use crate::validation::constants::REQUIRED_MESSAGE;
use crate::validation::types::Validator;

/// Accepts any value holding at least one non-whitespace character
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredValidator {
    message: String,
}

message_override!(RequiredValidator, REQUIRED_MESSAGE);

impl Validator for RequiredValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}
