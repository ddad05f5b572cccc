//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that composes rules.

use std::borrow::Cow;

use crate::combinators::{Or, WithCode};
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validation rule implements.
///
/// Rules are pure: the same input always yields the same verdict, and an
/// invalid input is an ordinary `Err(Violation)` return, never a panic.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::{Validate, ValidationResult, Violation};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> ValidationResult {
///         if input.contains(' ') {
///             Err(Violation::new("no_spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("lan0").is_ok());
/// assert!(NoSpaces.validate("lan 0").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so rules can validate `str` and `[T]` directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> ValidationResult;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use netpanel_validator::prelude::*;
///
/// let host = hostname().or(ip_address()).with_code("invalid_host");
/// assert!(host.validate("gateway.lan").is_ok());
/// assert!(host.validate("fe80::1%eth0").is_ok());
/// assert_eq!(host.validate("-bad-").unwrap_err().code(), "invalid_host");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Passes when either rule passes. Short-circuits on the first success;
    /// when both fail the right-hand violation is returned.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Replaces the code of any violation, dropping its parameters.
    fn with_code(self, code: impl Into<Cow<'static, str>>) -> WithCode<Self> {
        WithCode::new(self, code)
    }

    /// Boxes the rule behind a trait object.
    fn boxed<'a>(self) -> Box<dyn Validate<Input = Self::Input> + Send + Sync + 'a>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
