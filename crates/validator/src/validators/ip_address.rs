//! IP address validators for IPv4 and IPv6.
//!
//! IPv4 text is matched structurally and the octets are range checked from
//! the captures; IPv6 text is matched against the full textual grammar in
//! [`crate::patterns`]. Leading zeros in IPv4 octets (`010.0.0.1`) are
//! accepted, as the appliance's configuration tools accept them.

use regex::Captures;

use crate::combinators::{Or, WithCode};
use crate::foundation::{Validate, ValidateExt, ValidationResult, Violation};
use crate::patterns::{IPV4_CIDR_SHAPE, IPV4_SHAPE, IPV4_SUBNET_MASK, IPV6, IPV6_CIDR};

/// Largest IPv4 prefix length.
pub const MAX_V4_PREFIX: u8 = 32;

/// True when capture groups `1..=4` are octets in `0..=255`.
fn octets_in_range(caps: &Captures<'_>) -> bool {
    (1..=4).all(|i| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u16>().ok())
            .is_some_and(|octet| octet <= 255)
    })
}

// ============================================================================
// IPV4 VALIDATOR
// ============================================================================

/// Validates dotted-decimal IPv4 addresses.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::ipv4;
///
/// assert!(ipv4().validate("255.255.255.255").is_ok());
/// assert_eq!(ipv4().validate("256.0.0.1").unwrap_err().code(), "invalid_ip_v4_address");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv4;

impl Ipv4 {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "invalid_ip_v4_address";
}

impl Validate for Ipv4 {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        match IPV4_SHAPE.captures(input) {
            Some(caps) if octets_in_range(&caps) => Ok(()),
            _ => Err(Violation::new(Self::CODE)),
        }
    }
}

/// Creates an [`Ipv4`] validator.
#[must_use]
pub const fn ipv4() -> Ipv4 {
    Ipv4
}

// ============================================================================
// IPV4 CIDR VALIDATOR
// ============================================================================

/// Validates IPv4 networks in CIDR notation (`10.0.0.0/8`).
///
/// The address part is not required to be the network address:
/// `10.0.0.1/8` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv4Cidr;

impl Ipv4Cidr {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "invalid_cidr_v4_address";
}

impl Validate for Ipv4Cidr {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        let valid = IPV4_CIDR_SHAPE.captures(input).is_some_and(|caps| {
            octets_in_range(&caps)
                && caps[5]
                    .parse::<u8>()
                    .is_ok_and(|prefix| prefix <= MAX_V4_PREFIX)
        });

        if valid {
            Ok(())
        } else {
            Err(Violation::new(Self::CODE))
        }
    }
}

/// Creates an [`Ipv4Cidr`] validator.
#[must_use]
pub const fn ipv4_cidr() -> Ipv4Cidr {
    Ipv4Cidr
}

// ============================================================================
// IPV6 VALIDATORS
// ============================================================================

crate::rule! {
    /// Validates IPv6 addresses, including `::` compression, embedded IPv4
    /// and link-local zone indices (`fe80::1%eth0`).
    pub Ipv6 for str;
    rule(input) { IPV6.is_match(input) }
    code "invalid_ip_v6_address";
    fn ipv6();
}

crate::rule! {
    /// Validates IPv6 networks in CIDR notation, prefix length 0-128.
    pub Ipv6Cidr for str;
    rule(input) { IPV6_CIDR.is_match(input) }
    code "invalid_cidr_v6_address";
    fn ipv6_cidr();
}

// ============================================================================
// IP ADDRESS VALIDATOR
// ============================================================================

/// An IPv4 or IPv6 address, reported as `invalid_ip_address` when neither
/// matches.
pub type IpAddress = WithCode<Or<Ipv4, Ipv6>>;

/// Identifier reported by [`ip_address`].
pub const INVALID_IP_ADDRESS: &str = "invalid_ip_address";

/// Creates an [`IpAddress`] validator.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::ip_address;
///
/// assert!(ip_address().validate("192.168.1.1").is_ok());
/// assert!(ip_address().validate("2001:db8::1").is_ok());
/// assert_eq!(
///     ip_address().validate("999.1.1.1").unwrap_err().code(),
///     "invalid_ip_address"
/// );
/// ```
#[must_use]
pub fn ip_address() -> IpAddress {
    ipv4().or(ipv6()).with_code(INVALID_IP_ADDRESS)
}

// ============================================================================
// SUBNET MASK VALIDATOR
// ============================================================================

crate::rule! {
    /// Validates contiguous dotted-decimal IPv4 netmasks such as
    /// `255.255.255.0`.
    pub Ipv4SubnetMask for str;
    rule(input) { IPV4_SUBNET_MASK.is_match(input) }
    code "invalid_ip_v4_subnet_mask";
    fn ipv4_subnet_mask();
}

// ============================================================================
// TESTS
// ============================================================================
