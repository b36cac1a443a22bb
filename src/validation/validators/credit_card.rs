use crate::validation::constants::{CREDIT_CARD_MESSAGE, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::validation::types::Validator;

/// Accepts card numbers whose digits pass the Luhn checksum.
///
/// Separators and any other non-digit characters are ignored, so
/// `4532 0151 1283 0366` and `4532-0151-1283-0366` are both accepted.
/// Only the structure of the number is checked, not the issuer or
/// whether the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreditCardValidator {
    message: String,
}

message_override!(CreditCardValidator, CREDIT_CARD_MESSAGE);

impl Validator for CreditCardValidator {
    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }

        let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

        if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
            return false;
        }

        luhn_sum(&digits) % 10 == 0
    }
}

/// Luhn sum: every second digit from the right is doubled, minus 9 when above 9
fn luhn_sum(digits: &[u32]) -> u32 {
    let mut sum = 0;
    let mut alternate = false;

    for &digit in digits.iter().rev() {
        let mut n = digit;
        if alternate {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }

        sum += n;
        alternate = !alternate;
    }

    sum
}
