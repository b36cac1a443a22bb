//! Built-in validators, one per file

/// Generates the message handling shared by every built-in validator:
/// a default message, an override at construction and a setter.
macro_rules! message_override {
    ($validator:ident, $default:expr) => {
        impl $validator {
            /// Creates the validator with its default message
            pub fn new() -> Self {
                Self {
                    message: $default.to_owned(),
                }
            }

            /// Creates the validator with a custom failure message
            pub fn with_message(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                }
            }

            /// Replaces the failure message
            pub fn set_message(&mut self, message: impl Into<String>) {
                self.message = message.into();
            }
        }

        impl Default for $validator {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

mod credit_card;
mod email;
mod passport;
mod password;
mod required;
mod url;

pub use credit_card::CreditCardValidator;
pub use email::EmailValidator;
pub use passport::PassportValidator;
pub use password::PasswordValidator;
pub use required::RequiredValidator;
pub use self::url::UrlValidator;
