//! OR combinator - logical disjunction of rules

use crate::foundation::{Validate, ValidationResult};

/// Combines two rules with logical OR.
///
/// If the left rule passes the right one is not evaluated. When both fail,
/// the right-hand violation is returned; wrap the result in
/// [`WithCode`](super::WithCode) to report a composite identifier instead.
///
/// # Examples
///
/// ```
/// use netpanel_validator::combinators::Or;
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::{ipv4, ipv6};
///
/// let validator = Or::new(ipv4(), ipv6());
/// assert!(validator.validate("192.168.1.1").is_ok());
/// assert!(validator.validate("::1").is_ok());
/// assert_eq!(validator.validate("x").unwrap_err().code(), "invalid_ip_v6_address");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.left.validate(input).or_else(|_| self.right.validate(input))
    }
}

/// Creates an [`Or`] combinator.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
