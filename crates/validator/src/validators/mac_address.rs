//! MAC Address validator.
//!
//! Accepts the two notations the appliance's configuration system stores:
//! colon-separated (`AA:BB:CC:DD:EE:FF`) and hyphen-separated
//! (`AA-BB-CC-DD-EE-FF`). Case is irrelevant.

use crate::patterns::MAC_ADDRESS;

crate::rule! {
    /// Validates MAC addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpanel_validator::foundation::Validate;
    /// use netpanel_validator::validators::mac_address;
    ///
    /// let validator = mac_address();
    ///
    /// assert!(validator.validate("AA:BB:CC:DD:EE:FF").is_ok());
    /// assert!(validator.validate("aa-bb-cc-dd-ee-ff").is_ok());
    ///
    /// assert!(validator.validate("AABB.CCDD.EEFF").is_err());
    /// assert!(validator.validate("GG:HH:II:JJ:KK:LL").is_err());
    /// ```
    pub MacAddress for str;
    rule(input) { MAC_ADDRESS.is_match(input) }
    code "invalid_mac_address";
    fn mac_address();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("AA:BB:CC:DD:EE:FF")]
    #[case("aa:bb:cc:dd:ee:ff")]
    #[case("00:11:22:33:44:55")]
    #[case("AA-BB-CC-DD-EE-FF")]
    #[case("00:11-22:33-44:55")]
    fn test_valid(#[case] mac: &str) {
        assert!(mac_address().validate(mac).is_ok(), "{mac}");
    }

    #[rstest]
    #[case("")]
    #[case("AABBCCDDEEFF")]
    #[case("AABB.CCDD.EEFF")]
    #[case("AA:BB:CC")]
    #[case("AA:BB:CC:DD:EE:FF:00")]
    #[case("GG:HH:II:JJ:KK:LL")]
    #[case("A:BB:CC:DD:EE:FF")]
    #[case("AA:BB:CC:DD:EE:FF ")]
    fn test_invalid(#[case] mac: &str) {
        assert_eq!(
            mac_address().validate(mac).unwrap_err().code(),
            "invalid_mac_address",
            "{mac}"
        );
    }

    #[test]
    fn test_code_constant() {
        assert_eq!(MacAddress::CODE, "invalid_mac_address");
    }
}
