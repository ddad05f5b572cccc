//! Submit-time orchestration: run rules per field, collect failures, and
//! block the submission when anything failed.

use crate::bag::MessageBag;
use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Checks one form submission.
///
/// # Examples
///
/// ```
/// use netpanel_validator::form::FormCheck;
/// use netpanel_validator::foundation::ValidationError;
/// use netpanel_validator::validators::{hostname, vlan_id};
///
/// let mut form = FormCheck::new();
/// form.check("hostname", "gateway", &hostname());
/// form.check("vlan", "4095", &vlan_id());
///
/// assert_eq!(form.finish(), Err(ValidationError));
/// assert_eq!(form.bag().first_for("vlan"), "invalid_vlan_id");
/// assert!(!form.bag().contains("hostname"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormCheck {
    bag: MessageBag,
}

impl FormCheck {
    /// Starts a check with an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a check that appends to an existing bag.
    #[must_use]
    pub const fn with_bag(bag: MessageBag) -> Self {
        Self { bag }
    }

    /// Runs `rule` on `value` and records the violation under `field`.
    /// Returns whether the value was valid.
    pub fn check<V>(&mut self, field: &str, value: &V::Input, rule: &V) -> bool
    where
        V: Validate + ?Sized,
    {
        self.record(field, rule.validate(value))
    }

    /// Records a verdict computed elsewhere. Returns whether it was valid.
    pub fn record(&mut self, field: &str, result: ValidationResult) -> bool {
        match result {
            Ok(()) => true,
            Err(violation) => {
                self.bag.set(field, violation);
                false
            }
        }
    }

    /// The errors collected so far.
    pub const fn bag(&self) -> &MessageBag {
        &self.bag
    }

    /// Consumes the check, returning its errors.
    pub fn into_bag(self) -> MessageBag {
        self.bag
    }

    /// Fails with [`ValidationError`] when any field was flagged. The
    /// detail stays in the bag.
    pub fn finish(&self) -> Result<(), ValidationError> {
        if self.bag.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = self.bag.len(), "submission blocked by invalid fields");
            Err(ValidationError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Violation;
    use crate::validators::{equals, port, required, required_option};

    #[test]
    fn clean_form_finishes() {
        let mut form = FormCheck::new();
        assert!(form.check("name", "lan", &required()));
        assert!(form.check("port", "22", &port()));
        assert_eq!(form.finish(), Ok(()));
        assert!(form.into_bag().is_empty());
    }

    #[test]
    fn failures_land_in_the_bag() {
        let mut form = FormCheck::new();
        assert!(!form.check("name", "", &required()));
        assert!(!form.check("zones", &[] as &[&str], &required_option::<&str>()));
        assert!(!form.check("confirm", "b", &equals("a")));

        let bag = form.bag();
        assert_eq!(bag.first_for("name"), "required");
        assert_eq!(bag.first_for("zones"), "required_option");
        assert_eq!(bag.first_for("confirm"), "invalid_equal");
        assert_eq!(form.finish(), Err(ValidationError));
    }

    #[test]
    fn record_and_existing_bag() {
        let mut bag = MessageBag::new();
        bag.set("server", "standalone.server_unreachable");
        let mut form = FormCheck::with_bag(bag);
        assert!(form.record("name", Ok(())));
        assert!(!form.record("name", Err(Violation::new("required"))));
        assert_eq!(form.bag().len(), 2);
        assert!(form.finish().is_err());
    }

    #[test]
    fn dyn_rules_are_accepted() {
        let rule: Box<dyn Validate<Input = str> + Send + Sync> = Box::new(port());
        let mut form = FormCheck::new();
        assert!(!form.check("port", "0", rule.as_ref()));
        assert_eq!(form.bag().first_for("port"), "invalid_port");
    }
}
