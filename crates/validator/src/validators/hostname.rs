//! Hostname and host validators.
//!
//! The hostname grammar is looser than RFC 1123:
//! - Total length: at most 253 characters
//! - Either a single label of letters, digits and underscores
//! - Or a dotted name that starts with a letter, digit or underscore, ends
//!   with a letter or digit, and is not made only of digits and dots

use crate::combinators::{Or, WithCode};
use crate::foundation::{Validate, ValidateExt, ValidationResult, Violation};
use crate::patterns::{MULTI_LABEL, NOT_DIGIT_OR_DOT, SINGLE_LABEL};
use crate::validators::ip_address::{IpAddress, ip_address};

/// Longest hostname accepted, in characters.
pub const MAX_HOSTNAME_LENGTH: usize = 253;

// ============================================================================
// HOSTNAME VALIDATOR
// ============================================================================

/// Validates hostnames.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::hostname;
///
/// let v = hostname();
/// assert!(v.validate("gateway").is_ok());
/// assert!(v.validate("fw01.example.org").is_ok());
/// assert!(v.validate("my_host").is_ok());
/// assert_eq!(v.validate("10.0.0.1").unwrap_err().code(), "invalid_hostname");
/// assert_eq!(v.validate("-bad").unwrap_err().code(), "invalid_hostname");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hostname;

impl Hostname {
    /// Reported for a malformed hostname.
    pub const CODE: &'static str = "invalid_hostname";
    /// Reported when the hostname exceeds [`MAX_HOSTNAME_LENGTH`].
    pub const TOO_LONG: &'static str = "hostname_is_too_long";
}

impl Validate for Hostname {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if input.chars().count() > MAX_HOSTNAME_LENGTH {
            return Err(Violation::new(Self::TOO_LONG));
        }

        let well_formed = SINGLE_LABEL.is_match(input)
            || (MULTI_LABEL.is_match(input) && NOT_DIGIT_OR_DOT.is_match(input));

        if well_formed {
            Ok(())
        } else {
            Err(Violation::new(Self::CODE))
        }
    }
}

/// Creates a new [`Hostname`] validator.
#[must_use]
pub const fn hostname() -> Hostname {
    Hostname
}

// ============================================================================
// HOST VALIDATOR
// ============================================================================

/// A hostname or an IP address, reported as `invalid_host` when neither
/// matches.
pub type Host = WithCode<Or<Hostname, IpAddress>>;

/// Identifier reported by [`host`].
pub const INVALID_HOST: &str = "invalid_host";

/// Creates a [`Host`] validator.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::host;
///
/// assert!(host().validate("ntp.example.org").is_ok());
/// assert!(host().validate("192.168.1.1").is_ok());
/// assert!(host().validate("2001:db8::1").is_ok());
/// assert_eq!(host().validate("300.1.1.1").unwrap_err().code(), "invalid_host");
/// ```
#[must_use]
pub fn host() -> Host {
    hostname().or(ip_address()).with_code(INVALID_HOST)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("localhost")]
    #[case("a")]
    #[case("_")]
    #[case("123")]
    #[case("my_host")]
    #[case("example.com")]
    #[case("api.example.com")]
    #[case("EXAMPLE.COM")]
    #[case("my-host.example.com")]
    #[case("_srv.example.com")]
    #[case("1.2.3.a")]
    fn valid_hostnames(#[case] name: &str) {
        assert!(hostname().validate(name).is_ok(), "{name}");
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("-example.com")]
    #[case("example.com.")]
    #[case("example-")]
    #[case("exam ple.com")]
    #[case("1.2.3.4")]
    #[case("123.456")]
    #[case("a.host_")]
    #[case("hôte.example")]
    fn invalid_hostnames(#[case] name: &str) {
        assert_eq!(
            hostname().validate(name).unwrap_err().code(),
            "invalid_hostname",
            "{name}"
        );
    }

    #[test]
    fn single_label_may_end_with_underscore() {
        // Only the dotted grammar requires an alphanumeric last character.
        assert!(hostname().validate("host_").is_ok());
    }

    #[test]
    fn length_boundary() {
        let ok = "a".repeat(MAX_HOSTNAME_LENGTH);
        assert!(hostname().validate(&ok).is_ok());

        let long = "a".repeat(MAX_HOSTNAME_LENGTH + 1);
        assert_eq!(
            hostname().validate(&long).unwrap_err().code(),
            "hostname_is_too_long"
        );
    }

    #[test]
    fn too_long_wins_over_malformed() {
        let long = "-".repeat(MAX_HOSTNAME_LENGTH + 1);
        assert_eq!(
            hostname().validate(&long).unwrap_err().code(),
            "hostname_is_too_long"
        );
    }

    #[rstest]
    #[case("fw.example.org", true)]
    #[case("10.0.0.1", true)]
    #[case("::1", true)]
    #[case("fe80::1%eth0", true)]
    #[case("256.0.0.1", false)]
    #[case("-", false)]
    #[case("", false)]
    fn host_accepts_names_and_addresses(#[case] value: &str, #[case] expected: bool) {
        let result = host().validate(value);
        assert_eq!(result.is_ok(), expected, "{value}");
        if let Err(err) = result {
            assert_eq!(err.code(), "invalid_host");
        }
    }
}
