//! One-shot rule functions.
//!
//! Each function builds the matching rule from
//! [`validators`](crate::validators) and runs it once. Handy at call sites
//! that validate a single value and do not keep a rule around.
//!
//! ```
//! use netpanel_validator::checks::{validate_ip4_cidr, validate_uci_name};
//!
//! assert!(validate_ip4_cidr("10.0.0.0/32").is_ok());
//! assert!(validate_ip4_cidr("10.0.0.0/33").is_err());
//! assert_eq!(
//!     validate_uci_name("my_name", 5).unwrap_err().code(),
//!     "maximum_num_characters_allowed"
//! );
//! ```

use crate::foundation::{Validate, ValidationResult};
use crate::validators::{
    File, FileHandle, Port, PortRange, equals, hexadecimal, host, hostname, ip_address, ipv4,
    ipv4_cidr, ipv4_mtu, ipv4_subnet_mask, ipv6, ipv6_cidr, ipv6_mtu, lease_time, mac_address,
    password, required, required_option, uci_name, vlan_id,
};

// ============================================================================
// PRESENCE
// ============================================================================

/// Non-empty text.
pub fn validate_required(value: &str) -> ValidationResult {
    required().validate(value)
}

/// At least one selected option.
pub fn validate_required_option<T>(options: &[T]) -> ValidationResult {
    required_option::<T>().validate(options)
}

/// A picked file, with the extension `format` when one is given.
pub fn validate_file(file: Option<&FileHandle>, format: Option<&str>) -> ValidationResult {
    File::new(format.map(str::to_owned)).check(file)
}

// ============================================================================
// NETWORK
// ============================================================================

/// Hostname, at most 253 characters.
pub fn validate_hostname(value: &str) -> ValidationResult {
    hostname().validate(value)
}

/// Hostname or IP address.
pub fn validate_host(value: &str) -> ValidationResult {
    host().validate(value)
}

/// MAC address.
pub fn validate_mac_address(value: &str) -> ValidationResult {
    mac_address().validate(value)
}

/// IPv4 or IPv6 address.
pub fn validate_ip_address(value: &str) -> ValidationResult {
    ip_address().validate(value)
}

/// Dotted-decimal IPv4 address.
pub fn validate_ip4_address(value: &str) -> ValidationResult {
    ipv4().validate(value)
}

/// IPv4 network in CIDR notation.
pub fn validate_ip4_cidr(value: &str) -> ValidationResult {
    ipv4_cidr().validate(value)
}

/// IPv6 address.
pub fn validate_ip6_address(value: &str) -> ValidationResult {
    ipv6().validate(value)
}

/// IPv6 network in CIDR notation.
pub fn validate_ip6_cidr(value: &str) -> ValidationResult {
    ipv6_cidr().validate(value)
}

/// IPv4 netmask.
pub fn validate_ip4_subnet_mask(value: &str) -> ValidationResult {
    ipv4_subnet_mask().validate(value)
}

/// IPv4 MTU, 576-9200.
pub fn validate_ip4_mtu(value: &str) -> ValidationResult {
    ipv4_mtu().validate(value)
}

/// IPv6 MTU, 1280-9200.
pub fn validate_ip6_mtu(value: &str) -> ValidationResult {
    ipv6_mtu().validate(value)
}

/// VLAN id, 1-4094.
pub fn validate_vlan_id(value: &str) -> ValidationResult {
    vlan_id().validate(value)
}

/// Port within `min..=max`.
pub fn validate_port(value: &str, min: u16, max: u16) -> ValidationResult {
    Port::new().min(min).max(max).validate(value)
}

/// Port list or span whose every port is within `min..=max`.
pub fn validate_port_range(value: &str, min: u16, max: u16) -> ValidationResult {
    PortRange::new(Port::new().min(min).max(max)).validate(value)
}

// ============================================================================
// IDENTIFIERS & SERVICES
// ============================================================================

/// Hex byte pairs.
pub fn validate_hexadecimal_string(value: &str) -> ValidationResult {
    hexadecimal().validate(value)
}

/// Configuration name of at most `max_length` characters; `0` is unbounded.
pub fn validate_uci_name(value: &str, max_length: usize) -> ValidationResult {
    uci_name(Some(max_length)).validate(value)
}

/// DHCP lease time.
pub fn validate_lease_time(value: &str) -> ValidationResult {
    lease_time().validate(value)
}

// ============================================================================
// CREDENTIALS
// ============================================================================

/// Password strength.
pub fn validate_password(value: &str) -> ValidationResult {
    password().validate(value)
}

/// Exact equality, for confirmation fields.
pub fn validate_string_equal(value: &str, other: &str) -> ValidationResult {
    equals(other).validate(value)
}
