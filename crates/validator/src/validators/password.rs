//! Password strength validator.

use crate::foundation::{Validate, ValidationResult, Violation};

/// Validates password strength.
///
/// Requirements are checked in a fixed order and the first unmet one is
/// reported:
///
/// 1. at least `min_length` characters (`password_too_short`)
/// 2. an ASCII lowercase letter (`password_lowercase_required`)
/// 3. an ASCII uppercase letter (`password_uppercase_required`)
/// 4. an ASCII digit (`password_number_required`)
/// 5. any other character (`password_special_character_required`)
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::password;
///
/// assert!(password().validate("abcdefgH1!").is_ok());
/// assert_eq!(
///     password().validate("abcdefgH1").unwrap_err().code(),
///     "password_special_character_required"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password {
    min_length: usize,
}

impl Password {
    /// Default minimum length.
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    /// Creates a validator with the default minimum length.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
        }
    }

    /// Sets the minimum length, counted in characters.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        let code = if input.chars().count() < self.min_length {
            "password_too_short"
        } else if !input.chars().any(|c| c.is_ascii_lowercase()) {
            "password_lowercase_required"
        } else if !input.chars().any(|c| c.is_ascii_uppercase()) {
            "password_uppercase_required"
        } else if !input.chars().any(|c| c.is_ascii_digit()) {
            "password_number_required"
        } else if input.chars().all(|c| c.is_ascii_alphanumeric()) {
            "password_special_character_required"
        } else {
            return Ok(());
        };
        Err(Violation::new(code))
    }
}

/// Creates a [`Password`] validator.
#[must_use]
pub const fn password() -> Password {
    Password::new()
}
