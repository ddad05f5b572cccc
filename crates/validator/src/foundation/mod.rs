//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Verdicts**: [`ValidationResult`], [`Violation`], [`ParamValue`]
//! - **Signal**: [`ValidationError`]
//!
//! A rule's verdict is a plain `Result`: `Ok(())` is valid and carries
//! nothing, `Err(Violation)` always carries an identifier. There is no
//! third outcome.

pub mod error;
pub mod traits;
pub mod violation;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use violation::{DEFAULT_NAMESPACE, ParamValue, Violation};

/// The verdict of a single rule.
pub type ValidationResult = Result<(), Violation>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs several rules over one value and returns the first violation.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::{Validate, first_violation};
/// use netpanel_validator::validators::{required, uci_name};
///
/// let name = uci_name(Some(8));
/// let rules: [&dyn Validate<Input = str>; 2] = [&required(), &name];
/// assert_eq!(first_violation("", &rules).unwrap_err().code(), "required");
/// assert!(first_violation("lan", &rules).is_ok());
/// ```
pub fn first_violation<V>(value: &V::Input, rules: &[&V]) -> ValidationResult
where
    V: Validate + ?Sized,
{
    rules.iter().try_for_each(|rule| rule.validate(value))
}

/// Runs every rule over one value and collects all violations.
pub fn all_violations<V>(value: &V::Input, rules: &[&V]) -> Vec<Violation>
where
    V: Validate + ?Sized,
{
    rules
        .iter()
        .filter_map(|rule| rule.validate(value).err())
        .collect()
}
