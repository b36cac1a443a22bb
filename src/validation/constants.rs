//! Constants used throughout the validation system

/// Default message of the required validator
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Default message of the email validator
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
/// Default message of the password validator
pub const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, and a number.";
/// Default message of the URL validator
pub const URL_MESSAGE: &str = "Please enter a valid URL.";
/// Default message of the passport validator
pub const PASSPORT_MESSAGE: &str =
    "Please enter a valid passport number (1-2 letters followed by 6-9 digits).";
/// Default message of the credit card validator
pub const CREDIT_CARD_MESSAGE: &str = "Please enter a valid credit card number.";

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum number of digits in a card number
pub const MIN_CARD_DIGITS: usize = 13;
/// Maximum number of digits in a card number
pub const MAX_CARD_DIGITS: usize = 19;
