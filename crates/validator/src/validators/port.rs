//! Port number and port range validators.

use std::ops::RangeInclusive;

use crate::foundation::{Validate, ValidationResult, Violation};
use crate::validators::numeric::parse_port_token;

/// TCP/UDP ports a service may bind to.
pub const PORTS: RangeInclusive<u16> = 1..=65535;

// ============================================================================
// PORT VALIDATOR
// ============================================================================

/// Validates a TCP/UDP port field (1-65535 unless narrowed).
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::{Port, port};
///
/// assert!(port().validate("443").is_ok());
/// assert!(port().validate("0").is_err());
///
/// let unprivileged = Port::new().min(1024);
/// assert!(unprivileged.validate("80").is_err());
/// assert!(unprivileged.validate("8080").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port {
    min: u16,
    max: u16,
}

impl Port {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "invalid_port";

    /// Creates a port validator accepting 1-65535.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: *PORTS.start(),
            max: *PORTS.end(),
        }
    }

    /// Sets the lowest accepted port.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: u16) -> Self {
        self.min = min;
        self
    }

    /// Sets the highest accepted port.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: u16) -> Self {
        self.max = max;
        self
    }

    /// Whether a single token is a port within bounds.
    fn accepts(self, token: &str) -> bool {
        parse_port_token(token)
            .is_some_and(|port| (u32::from(self.min)..=u32::from(self.max)).contains(&port))
    }
}

impl Default for Port {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Port {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if self.accepts(input) {
            Ok(())
        } else {
            Err(Violation::new(Self::CODE))
        }
    }
}

/// Creates a [`Port`] validator with the default bounds.
#[must_use]
pub const fn port() -> Port {
    Port::new()
}

// ============================================================================
// PORT RANGE VALIDATOR
// ============================================================================

/// Validates port lists and spans such as `80`, `8000-8080` or
/// `22,80,443-445`.
///
/// The value is split on `,` and every piece on `-`; each resulting token
/// must pass the wrapped [`Port`] rule. Empty tokens (`"80,"`, `"-80"`) fail.
/// The span order is not checked: `"90-80"` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PortRange {
    port: Port,
}

impl PortRange {
    /// The identifier reported when this rule fails.
    pub const CODE: &'static str = "invalid_port_range";

    /// Creates a range validator whose tokens are checked by `port`.
    #[must_use]
    pub const fn new(port: Port) -> Self {
        Self { port }
    }
}

impl Validate for PortRange {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        let all_ports = input
            .split(',')
            .flat_map(|piece| piece.split('-'))
            .all(|token| self.port.accepts(token));
        if all_ports {
            Ok(())
        } else {
            Err(Violation::new(Self::CODE))
        }
    }
}

/// Creates a [`PortRange`] validator with the default bounds.
#[must_use]
pub const fn port_range() -> PortRange {
    PortRange::new(Port::new())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("80", true)]
    #[case("65535", true)]
    #[case(" 8080 ", true)]
    #[case("+22", true)]
    #[case("0", false)]
    #[case("65536", false)]
    #[case("99999999999", false)]
    #[case("", false)]
    #[case("http", false)]
    #[case("80a", false)]
    #[case("-1", false)]
    fn port_cases(#[case] value: &str, #[case] expected: bool) {
        let result = port().validate(value);
        assert_eq!(result.is_ok(), expected, "{value}");
        if let Err(err) = result {
            assert_eq!(err.code(), "invalid_port");
        }
    }

    #[test]
    fn port_custom_bounds() {
        let rule = Port::new().min(1000).max(2000);
        assert!(rule.validate("1000").is_ok());
        assert!(rule.validate("2000").is_ok());
        assert!(rule.validate("999").is_err());
        assert!(rule.validate("2001").is_err());
    }

    #[rstest]
    #[case("80", true)]
    #[case("8000-8080", true)]
    #[case("22,80,443", true)]
    #[case("22,80,443-445", true)]
    #[case("90-80", true)]
    #[case("80-99999", false)]
    #[case("0-80", false)]
    #[case("-80", false)]
    #[case("80,", false)]
    #[case("80--90", false)]
    #[case("", false)]
    #[case("a-b", false)]
    fn port_range_cases(#[case] value: &str, #[case] expected: bool) {
        let result = port_range().validate(value);
        assert_eq!(result.is_ok(), expected, "{value}");
        if let Err(err) = result {
            assert_eq!(err.code(), "invalid_port_range");
        }
    }

    #[test]
    fn port_range_uses_port_bounds() {
        let rule = PortRange::new(Port::new().max(1023));
        assert!(rule.validate("22,80").is_ok());
        assert!(rule.validate("22,8080").is_err());
    }
}
