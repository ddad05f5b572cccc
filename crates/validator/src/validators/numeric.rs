//! Parsing of numeric form fields.
//!
//! Form values arrive as text. Two readings are used:
//!
//! - [`parse_integral`]: any finite decimal number without a fractional
//!   part (`"1500"`, `"1500.0"`, `"1.5e3"`), surrounding whitespace
//!   ignored. Used by the MTU and VLAN rules.
//! - [`parse_port_token`]: an optional `+` and ASCII digits only, surrounding
//!   whitespace ignored. Used by the port rules.

/// Parses an integral decimal number, or `None`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "the value is finite, integral and inside the i64 range before the cast"
)]
pub(crate) fn parse_integral(value: &str) -> Option<i64> {
    let trimmed = value.trim_ascii();
    // `f64::from_str` also accepts "inf" and "NaN" spellings.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    let number: f64 = trimmed.parse().ok()?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Parses a port token, or `None`. Values too large for `u32` saturate so
/// they still compare as out of range.
pub(crate) fn parse_port_token(value: &str) -> Option<u32> {
    let trimmed = value.trim_ascii();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1500", Some(1500))]
    #[case(" 1500 ", Some(1500))]
    #[case("1500.0", Some(1500))]
    #[case("1.5e3", Some(1500))]
    #[case("-3", Some(-3))]
    #[case("1500.5", None)]
    #[case("", None)]
    #[case("abc", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("infinity", None)]
    #[case("0x5dc", None)]
    #[case("-9223372036854775808", Some(i64::MIN))]
    #[case("9223372036854775808", None)]
    #[case("1e300", None)]
    fn integral(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_integral(input), expected);
    }

    #[rstest]
    #[case("80", Some(80))]
    #[case(" 443", Some(443))]
    #[case("+22", Some(22))]
    #[case("99999999999", Some(u32::MAX))]
    #[case("", None)]
    #[case("-1", None)]
    #[case("80a", None)]
    #[case("8 0", None)]
    #[case("+", None)]
    fn port_token(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_port_token(input), expected);
    }
}
