//! Hexadecimal string validator

use crate::patterns::HEX_PAIRS;

crate::rule! {
    /// Validates a non-empty string of hex byte pairs, as used for keys and
    /// DHCP option payloads.
    ///
    /// Each pair must be uniformly cased: `"deadBEEF"` is accepted,
    /// `"dEadbeef"` is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use netpanel_validator::foundation::Validate;
    /// use netpanel_validator::validators::hexadecimal;
    ///
    /// assert!(hexadecimal().validate("0a1B").is_ok());
    /// assert!(hexadecimal().validate("aB").is_err());
    /// assert!(hexadecimal().validate("abc").is_err());
    /// ```
    pub Hexadecimal for str;
    rule(input) { HEX_PAIRS.is_match(input) }
    code "invalid_hexadecimal_string";
    fn hexadecimal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn even_length_pairs() {
        assert!(hexadecimal().validate("00").is_ok());
        assert!(hexadecimal().validate("DEADBEEF").is_ok());
        assert!(hexadecimal().validate("deadbeef").is_ok());
    }

    #[test]
    fn case_is_uniform_within_each_pair() {
        for value in ["deadBEEF", "0a1B", "FFee"] {
            assert!(hexadecimal().validate(value).is_ok(), "{value}");
        }
        for value in ["aB", "Ab", "dEadbeef", "00fA"] {
            assert_eq!(
                hexadecimal().validate(value).unwrap_err().code(),
                "invalid_hexadecimal_string",
                "{value}"
            );
        }
    }

    #[test]
    fn rejects_odd_empty_and_non_hex() {
        for value in ["", "0", "abc", "0g", "0x00", "de ad"] {
            assert_eq!(
                hexadecimal().validate(value).unwrap_err().code(),
                "invalid_hexadecimal_string",
                "{value}"
            );
        }
    }
}
