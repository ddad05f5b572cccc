//! Configuration identifier validator.

use crate::foundation::{Validate, ValidationResult, Violation};
use crate::patterns::UCI_NAME;

/// Validates configuration section and option names: ASCII letters, digits
/// and underscores, optionally capped in length.
///
/// A cap of `None` or `Some(0)` means unbounded. The charset is checked
/// first, so `"bad-name-too-long"` reports `invalid_uci_name`.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::{ParamValue, Validate};
/// use netpanel_validator::validators::uci_name;
///
/// assert!(uci_name(None).validate("wan_6").is_ok());
///
/// let err = uci_name(Some(5)).validate("my_name").unwrap_err();
/// assert_eq!(err.code(), "maximum_num_characters_allowed");
/// assert_eq!(err.param("num"), Some(&ParamValue::Int(5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UciName {
    max_length: Option<usize>,
}

impl UciName {
    /// The identifier reported for a bad character set.
    pub const CODE: &'static str = "invalid_uci_name";
    /// The identifier reported when the cap is exceeded; carries `num`.
    pub const TOO_LONG: &'static str = "maximum_num_characters_allowed";

    /// Creates a validator with an optional length cap.
    #[must_use]
    pub const fn new(max_length: Option<usize>) -> Self {
        Self { max_length }
    }

    /// The effective cap, if any.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length.filter(|&max| max > 0)
    }
}

impl Validate for UciName {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if !UCI_NAME.is_match(input) {
            return Err(Violation::new(Self::CODE));
        }
        match self.max_length() {
            // The charset is ASCII, so byte length is the character count.
            Some(max) if input.len() > max => {
                Err(Violation::new(Self::TOO_LONG).with_param("num", max))
            }
            _ => Ok(()),
        }
    }
}

/// Creates a [`UciName`] validator.
#[must_use]
pub const fn uci_name(max_length: Option<usize>) -> UciName {
    UciName::new(max_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ParamValue;
    use rstest::rstest;

    #[rstest]
    #[case("lan")]
    #[case("wan_6")]
    #[case("_")]
    #[case("ABC123")]
    fn accepts_identifiers(#[case] value: &str) {
        assert!(uci_name(None).validate(value).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("my-name")]
    #[case("my name")]
    #[case("naïve")]
    #[case("a.b")]
    fn rejects_charset(#[case] value: &str) {
        assert_eq!(
            uci_name(Some(3)).validate(value).unwrap_err().code(),
            "invalid_uci_name"
        );
    }

    #[test]
    fn length_cap_reports_num() {
        let err = uci_name(Some(5)).validate("my_name").unwrap_err();
        assert_eq!(err.code(), "maximum_num_characters_allowed");
        assert_eq!(err.param("num"), Some(&ParamValue::Int(5)));
        assert!(uci_name(Some(5)).validate("abcde").is_ok());
    }

    #[test]
    fn zero_cap_is_unbounded() {
        let long = "a".repeat(200);
        assert!(uci_name(Some(0)).validate(&long).is_ok());
        assert!(uci_name(None).validate(&long).is_ok());
        assert_eq!(uci_name(Some(0)).max_length(), None);
    }
}
