//! Integer range rules over numeric form fields
//!
//! - [`Mtu`] - interface MTU, with separate IPv4 and IPv6 floors
//! - [`VlanId`] - 802.1Q VLAN identifier
//!
//! Both read the field with the integral-number parser in
//! [`numeric`](super::numeric), so `"1500"`, `" 1500 "` and `"1500.0"` are
//! the same value.

use std::ops::RangeInclusive;

use crate::foundation::{Validate, ValidationResult, Violation};
use crate::validators::numeric::parse_integral;

/// Default IPv4 MTU bounds.
pub const IPV4_MTU: RangeInclusive<i64> = 576..=9200;
/// Default IPv6 MTU bounds (RFC 8200 minimum link MTU).
pub const IPV6_MTU: RangeInclusive<i64> = 1280..=9200;
/// Usable 802.1Q VLAN identifiers.
pub const VLAN_IDS: RangeInclusive<i64> = 1..=4094;

fn in_range(value: &str, bounds: &RangeInclusive<i64>) -> bool {
    parse_integral(value).is_some_and(|n| bounds.contains(&n))
}

// ============================================================================
// MTU
// ============================================================================

/// Address family an MTU applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    /// IPv4.
    V4,
    /// IPv6.
    V6,
}

/// Validates an interface MTU.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::{ipv4_mtu, ipv6_mtu};
///
/// assert!(ipv4_mtu().validate("576").is_ok());
/// assert_eq!(ipv6_mtu().validate("576").unwrap_err().code(), "invalid_ip_v6_mtu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mtu {
    family: IpFamily,
    bounds: RangeInclusive<i64>,
}

impl Mtu {
    /// Creates an MTU rule with the default bounds for `family`.
    #[must_use]
    pub fn new(family: IpFamily) -> Self {
        let bounds = match family {
            IpFamily::V4 => IPV4_MTU,
            IpFamily::V6 => IPV6_MTU,
        };
        Self { family, bounds }
    }

    /// Overrides the accepted bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn bounds(mut self, bounds: RangeInclusive<i64>) -> Self {
        self.bounds = bounds;
        self
    }

    /// The identifier reported for this family.
    pub const fn code(&self) -> &'static str {
        match self.family {
            IpFamily::V4 => "invalid_ip_v4_mtu",
            IpFamily::V6 => "invalid_ip_v6_mtu",
        }
    }
}

impl Validate for Mtu {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if in_range(input, &self.bounds) {
            Ok(())
        } else {
            Err(Violation::new(self.code()))
        }
    }
}

/// Creates an IPv4 [`Mtu`] rule, 576-9200.
#[must_use]
pub fn ipv4_mtu() -> Mtu {
    Mtu::new(IpFamily::V4)
}

/// Creates an IPv6 [`Mtu`] rule, 1280-9200.
#[must_use]
pub fn ipv6_mtu() -> Mtu {
    Mtu::new(IpFamily::V6)
}

// ============================================================================
// VLAN ID
// ============================================================================

/// Validates a VLAN identifier, 1-4094 by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VlanId {
    bounds: RangeInclusive<i64>,
}

impl VlanId {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "invalid_vlan_id";

    /// Creates a rule with the 802.1Q bounds.
    #[must_use]
    pub fn new() -> Self {
        Self { bounds: VLAN_IDS }
    }

    /// Overrides the accepted bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn bounds(mut self, bounds: RangeInclusive<i64>) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Default for VlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for VlanId {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if in_range(input, &self.bounds) {
            Ok(())
        } else {
            Err(Violation::new(Self::CODE))
        }
    }
}

/// Creates a [`VlanId`] rule.
#[must_use]
pub fn vlan_id() -> VlanId {
    VlanId::new()
}

// ============================================================================
// TESTS
// ============================================================================
