//! Presence rules
//!
//! - [`Required`] - a text field must not be empty
//! - [`RequiredOption`] - a multi-select must have at least one entry

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationResult, Violation};

crate::rule! {
    /// Validates that a text field is not empty.
    ///
    /// Whitespace counts as content: `" "` is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpanel_validator::foundation::Validate;
    /// use netpanel_validator::validators::required;
    ///
    /// assert!(required().validate("lan").is_ok());
    /// assert_eq!(required().validate("").unwrap_err().code(), "required");
    /// ```
    pub Required for str;
    rule(input) { !input.is_empty() }
    code "required";
    fn required();
}

/// Validates that a list of selected options is not empty.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::required_option;
///
/// let zones = required_option::<&str>();
/// assert!(zones.validate(&["lan", "wan"]).is_ok());
/// assert_eq!(zones.validate(&[]).unwrap_err().code(), "required_option");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequiredOption<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> RequiredOption<T> {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "required_option";
}

impl<T> Default for RequiredOption<T> {
    fn default() -> Self {
        required_option()
    }
}

impl<T> Validate for RequiredOption<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> ValidationResult {
        if input.is_empty() {
            Err(Violation::new(Self::CODE))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`RequiredOption`] rule.
#[must_use]
pub const fn required_option<T>() -> RequiredOption<T> {
    RequiredOption {
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_only_empty() {
        assert!(required().validate("x").is_ok());
        assert!(required().validate(" ").is_ok());
        assert_eq!(required().validate("").unwrap_err().code(), "required");
    }

    #[test]
    fn required_option_counts_entries() {
        let v = required_option::<String>();
        assert!(v.validate(&["lan".to_owned()]).is_ok());
        let err = v.validate(&[]).unwrap_err();
        assert_eq!(err.code(), "required_option");
        assert!(!err.has_params());
    }
}
