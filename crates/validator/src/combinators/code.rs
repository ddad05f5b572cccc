//! CODE combinator - composite error identifiers

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationResult, Violation};

/// Replaces the identifier of a failing rule.
///
/// The inner violation's parameters are dropped with its code: they were
/// meant for a different message template.
///
/// # Examples
///
/// ```
/// use netpanel_validator::combinators::with_code;
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::uci_name;
///
/// let zone = with_code(uci_name(Some(3)), "invalid_zone_name");
/// let err = zone.validate("toolong").unwrap_err();
/// assert_eq!(err.code(), "invalid_zone_name");
/// assert!(!err.has_params());
/// ```
#[derive(Debug, Clone)]
pub struct WithCode<V> {
    inner: V,
    code: Cow<'static, str>,
}

impl<V> WithCode<V> {
    /// Creates a new `WithCode` combinator.
    pub fn new(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            code: code.into(),
        }
    }

    /// Returns the replacement code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for WithCode<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.inner
            .validate(input)
            .map_err(|_| Violation::new(self.code.clone()))
    }
}

/// Creates a [`WithCode`] combinator.
pub fn with_code<V: Validate>(validator: V, code: impl Into<Cow<'static, str>>) -> WithCode<V> {
    WithCode::new(validator, code)
}
