//! Signal raised when a form submission is blocked.

/// Submission blocked by one or more invalid fields.
///
/// Carries no payload: the per-field detail lives in the
/// [`MessageBag`](crate::bag::MessageBag) that produced it. The display text
/// is itself a translation key.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::ValidationError;
///
/// assert_eq!(ValidationError.to_string(), "error.validation_failed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("error.validation_failed")]
pub struct ValidationError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(ValidationError);
        assert_eq!(err.to_string(), "error.validation_failed");
    }
}
