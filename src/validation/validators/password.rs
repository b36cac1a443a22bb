use crate::validation::constants::{MIN_PASSWORD_LENGTH, PASSWORD_MESSAGE};
use crate::validation::types::Validator;

/// Accepts passwords of at least 8 characters mixing upper case, lower case and digits.
/// Special characters are allowed but never required.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordValidator {
    message: String,
}

message_override!(PasswordValidator, PASSWORD_MESSAGE);

impl Validator for PasswordValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        if value.chars().count() < MIN_PASSWORD_LENGTH {
            return false;
        }

        let has_uppercase = value.chars().any(char::is_uppercase);
        let has_lowercase = value.chars().any(char::is_lowercase);
        let has_digit = value.chars().any(char::is_numeric);

        has_uppercase && has_lowercase && has_digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength() {
        let validator = PasswordValidator::new();

        let test_cases = vec![
            // (password, expected_valid)
            ("Abcdefg1", true),          // Exactly 8 chars, all classes
            ("StrongP@ssw0rd!", true),   // Special chars are fine
            ("ÉcoleMax9", true),         // Non-ASCII letters count
            ("Abcdefg\u{0661}", true),   // Arabic-Indic digit one
            ("Abcdefg\u{0967}", true),   // Devanagari digit one
            ("abcdefg1", false),         // No uppercase
            ("ABCDEFG1", false),         // No lowercase
            ("Abcdefgh", false),         // No digit
            ("Abc12", false),            // Too short
            ("Abcdef1", false),          // 7 chars
            ("", false),                 // Empty
            ("        ", false),         // Whitespace only
        ];

        for (password, expected_valid) in test_cases {
            assert_eq!(
                validator.validate(password),
                expected_valid,
                "Password '{}' validation result was unexpected",
                password
            );
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters but more than 8 bytes
        assert!(!PasswordValidator::new().validate("Ééééé1a"));
    }
}
