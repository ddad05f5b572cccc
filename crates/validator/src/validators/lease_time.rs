//! DHCP lease time validator.

use crate::foundation::{Validate, ValidationResult, Violation};
use crate::patterns::LEASE_TIME;

/// Validates dnsmasq-style lease times: a positive integer followed by a
/// unit (`s`, `m`, `h`, `d`, `w`), or the literal `infinity`.
///
/// Leases shorter than two minutes are rejected with
/// `invalid_lease_time_duration`. Only second and minute values can fall
/// below that floor.
///
/// # Examples
///
/// ```
/// use netpanel_validator::foundation::Validate;
/// use netpanel_validator::validators::lease_time;
///
/// assert!(lease_time().validate("12h").is_ok());
/// assert!(lease_time().validate("infinity").is_ok());
/// assert_eq!(lease_time().validate("119s").unwrap_err().code(), "invalid_lease_time_duration");
/// assert_eq!(lease_time().validate("12").unwrap_err().code(), "invalid_lease_time");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeaseTime {
    min_seconds: u64,
    min_minutes: u64,
}

impl LeaseTime {
    /// The identifier reported for malformed values.
    pub const CODE: &'static str = "invalid_lease_time";
    /// The identifier reported for leases under the minimum.
    pub const TOO_SHORT: &'static str = "invalid_lease_time_duration";
    /// Literal for a lease that never expires.
    pub const INFINITY: &'static str = "infinity";

    /// Creates a validator with a two-minute floor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_seconds: 120,
            min_minutes: 2,
        }
    }

    /// Sets the minimum for values given in seconds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_seconds(mut self, min: u64) -> Self {
        self.min_seconds = min;
        self
    }

    /// Sets the minimum for values given in minutes.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_minutes(mut self, min: u64) -> Self {
        self.min_minutes = min;
        self
    }

    fn too_short(&self, amount: u64, unit: char) -> bool {
        match unit {
            's' => amount < self.min_seconds,
            'm' => amount < self.min_minutes,
            _ => false,
        }
    }
}

impl Default for LeaseTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for LeaseTime {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if !LEASE_TIME.is_match(input) {
            return Err(Violation::new(Self::CODE));
        }
        if input == Self::INFINITY {
            return Ok(());
        }
        // The grammar guarantees ASCII digits followed by one unit letter.
        let (digits, unit) = input.split_at(input.len() - 1);
        // Overflowing amounts are far above any floor.
        let amount = digits.parse::<u64>().unwrap_or(u64::MAX);
        let unit = unit.chars().next().unwrap_or_default();
        if self.too_short(amount, unit) {
            Err(Violation::new(Self::TOO_SHORT))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`LeaseTime`] validator.
#[must_use]
pub const fn lease_time() -> LeaseTime {
    LeaseTime::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("120s", None)]
    #[case("2m", None)]
    #[case("1h", None)]
    #[case("1d", None)]
    #[case("1w", None)]
    #[case("infinity", None)]
    #[case("99999999999999999999999s", None)]
    #[case("119s", Some("invalid_lease_time_duration"))]
    #[case("1s", Some("invalid_lease_time_duration"))]
    #[case("1m", Some("invalid_lease_time_duration"))]
    #[case("0s", Some("invalid_lease_time"))]
    #[case("012h", Some("invalid_lease_time"))]
    #[case("12", Some("invalid_lease_time"))]
    #[case("12y", Some("invalid_lease_time"))]
    #[case("Infinity", Some("invalid_lease_time"))]
    #[case("", Some("invalid_lease_time"))]
    #[case(" 12h", Some("invalid_lease_time"))]
    fn lease_cases(#[case] value: &str, #[case] expected: Option<&str>) {
        let code = lease_time().validate(value).err();
        assert_eq!(code.as_ref().map(Violation::code), expected, "{value}");
    }

    #[test]
    fn configurable_floor() {
        let rule = lease_time().min_seconds(60).min_minutes(1);
        assert!(rule.validate("60s").is_ok());
        assert!(rule.validate("1m").is_ok());
        assert!(rule.validate("59s").is_err());
    }
}
