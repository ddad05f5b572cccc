//! Compiled grammars shared by the rules.
//!
//! Each grammar is a named, lazily compiled [`Regex`] so it can be tested on
//! its own, independently of the rule that wraps it. All character classes
//! are spelled out as ASCII ranges: `\d` would match any Unicode digit.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern {pattern:?} is invalid: {e}"))
}

// ============================================================================
// HOSTNAMES & IDENTIFIERS
// ============================================================================

/// A single label made of letters, digits and underscores.
pub static SINGLE_LABEL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9_]+$"));

/// A dotted hostname: starts with a word character, ends with an
/// alphanumeric, hyphens and dots allowed in between.
pub static MULTI_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9_][a-zA-Z0-9_\-.]*[a-zA-Z0-9]$"));

/// Any character that is neither a digit nor a dot. A hostname made only of
/// digits and dots would be an IPv4 look-alike.
pub static NOT_DIGIT_OR_DOT: LazyLock<Regex> = LazyLock::new(|| compile(r"[^0-9.]"));

/// Configuration-system identifier (section and option names).
pub static UCI_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9_]+$"));

// ============================================================================
// LINK LAYER
// ============================================================================

/// Six hex octets separated by `:` or `-`.
pub static MAC_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$"));

// ============================================================================
// IPV4
// ============================================================================

/// Four dotted groups of one to three digits. Octet ranges are checked by
/// the rule, from the captures.
pub static IPV4_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$"));

/// [`IPV4_SHAPE`] followed by a one or two digit prefix length.
pub static IPV4_CIDR_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$")
});

/// Contiguous dotted-decimal netmasks. Zero octets may be written as `0`,
/// `00` or `000`.
pub static IPV4_SUBNET_MASK: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(((255\.){3}(255|254|252|248|240|224|192|128|0+))",
        r"|((255\.){2}(255|254|252|248|240|224|192|128|0+)\.0)",
        r"|((255\.)(255|254|252|248|240|224|192|128|0+)(\.0+){2})",
        r"|((255|254|252|248|240|224|192|128|0+)(\.0+){3}))$",
    ))
});

// ============================================================================
// IPV6
// ============================================================================

/// Alternatives of the IPv6 text grammar, unanchored.
const IPV6_BODY: &str = concat!(
    // 1:2:3:4:5:6:7:8
    r"([0-9a-fA-F]{1,4}:){7,7}[0-9a-fA-F]{1,4}",
    // 1::  ...  1:2:3:4:5:6:7::
    r"|([0-9a-fA-F]{1,4}:){1,7}:",
    // 1::8  ...  1:2:3:4:5:6::8
    r"|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}",
    r"|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}",
    r"|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})",
    // ::2:3:4:5:6:7:8  and  ::
    r"|:((:[0-9a-fA-F]{1,4}){1,7}|:)",
    // link-local with zone index
    r"|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}",
    // ::255.255.255.255  ::ffff:255.255.255.255  ::ffff:0:255.255.255.255
    r"|::(ffff(:0{1,4}){0,1}:){0,1}((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}",
    r"(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
    // 2001:db8:3:4::192.0.2.33  64:ff9b::192.0.2.33
    r"|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}",
    r"(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
);

/// A complete IPv6 address.
pub static IPV6: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^({IPV6_BODY})$")));

/// An IPv6 address followed by a prefix length of 0-128.
pub static IPV6_CIDR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^({IPV6_BODY})/(?:12[0-8]|1[01][0-9]|[1-9]?[0-9])$"
    ))
});

// ============================================================================
// DHCP
// ============================================================================

/// A positive integer with a time unit, or `infinity`.
pub static LEASE_TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([1-9][0-9]*[smhdw]|infinity)$"));

// ============================================================================
// ENCODINGS
// ============================================================================

/// Pairs of hex digits; each pair is uniformly lower- or uppercase.
pub static HEX_PAIRS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([a-f0-9][a-f0-9]|[A-F0-9][A-F0-9])+$"));

// ============================================================================
// TESTS
// ============================================================================
