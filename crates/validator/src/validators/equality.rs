//! Confirmation-field validator.

crate::rule! {
    /// Validates that a value equals a reference value, as for "repeat
    /// password" fields. The comparison is exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpanel_validator::foundation::Validate;
    /// use netpanel_validator::validators::equals;
    ///
    /// assert!(equals("s3cret").validate("s3cret").is_ok());
    /// assert_eq!(equals("s3cret").validate("S3cret").unwrap_err().code(), "invalid_equal");
    /// ```
    pub Equals { other: String } for str;
    rule(self, input) { input == self.other }
    code "invalid_equal";
    fn equals(other: impl Into<String>) { Equals { other: other.into() } }
}
