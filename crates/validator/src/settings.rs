//! Configurable bounds and name-based rule lookup.
//!
//! [`RuleSettings`] holds every tunable bound; its `Default` is the stock
//! appliance policy. [`Rules`] builds rules from the settings and resolves
//! them by name for front ends that dispatch on strings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::bag::MessageBag;
use crate::foundation::{DEFAULT_NAMESPACE, Validate, ValidateExt};
use crate::validators::{
    IPV4_MTU, IPV6_MTU, LeaseTime, Mtu, PORTS, Password, Port, PortRange, UciName, VLAN_IDS,
    VlanId, equals, hexadecimal, host, hostname, ip_address, ipv4, ipv4_cidr, ipv4_mtu,
    ipv4_subnet_mask, ipv6, ipv6_cidr, ipv6_mtu, mac_address, required,
};

/// A rule over text, erased behind a trait object.
pub type DynRule = Box<dyn Validate<Input = str> + Send + Sync>;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors from loading settings or resolving rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A `min`/`max` pair is inverted.
    #[error("`{setting}`: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        /// Name of the offending setting.
        setting: &'static str,
        /// Configured minimum.
        min: i64,
        /// Configured maximum.
        max: i64,
    },

    /// The message namespace is empty.
    #[error("`namespace` must not be empty")]
    EmptyNamespace,

    /// No rule is registered under this name.
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    /// The rule compares against a second value that was not given.
    #[error("rule `{0}` needs a value to compare against")]
    MissingOther(String),
}

// ============================================================================
// SETTINGS
// ============================================================================

/// An inclusive integer range as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest accepted value.
    pub min: i64,
    /// Highest accepted value.
    pub max: i64,
}

impl Bounds {
    /// Creates bounds.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The bounds as a range.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    fn check(self, setting: &'static str) -> Result<(), SettingsError> {
        if self.min > self.max {
            return Err(SettingsError::InvertedRange {
                setting,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<RangeInclusive<i64>> for Bounds {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Tunable rule bounds. Every field is optional in configuration files.
///
/// # Examples
///
/// ```
/// use netpanel_validator::settings::RuleSettings;
///
/// let settings: RuleSettings = serde_json::from_str(r#"{ "port_min": 1024 }"#).unwrap();
/// assert_eq!(settings.port_min, 1024);
/// assert_eq!(settings.port_max, 65535);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Lowest port accepted by the port rules.
    pub port_min: u16,
    /// Highest port accepted by the port rules.
    pub port_max: u16,
    /// IPv4 MTU range.
    pub ipv4_mtu: Bounds,
    /// IPv6 MTU range.
    pub ipv6_mtu: Bounds,
    /// VLAN identifier range.
    pub vlan_id: Bounds,
    /// Shortest lease given in seconds.
    pub lease_min_seconds: u64,
    /// Shortest lease given in minutes.
    pub lease_min_minutes: u64,
    /// Shortest password, in characters.
    pub password_min_length: usize,
    /// Length cap of configuration names; `0` or absent is unbounded.
    pub uci_name_max_length: Option<usize>,
    /// Namespace of bare identifiers in translation keys.
    pub namespace: String,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            port_min: *PORTS.start(),
            port_max: *PORTS.end(),
            ipv4_mtu: IPV4_MTU.into(),
            ipv6_mtu: IPV6_MTU.into(),
            vlan_id: VLAN_IDS.into(),
            lease_min_seconds: 120,
            lease_min_minutes: 2,
            password_min_length: Password::DEFAULT_MIN_LENGTH,
            uci_name_max_length: None,
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }
}

impl RuleSettings {
    /// Rejects inverted ranges and an empty namespace.
    pub fn validate(&self) -> Result<(), SettingsError> {
        Bounds::new(i64::from(self.port_min), i64::from(self.port_max)).check("port")?;
        self.ipv4_mtu.check("ipv4_mtu")?;
        self.ipv6_mtu.check("ipv6_mtu")?;
        self.vlan_id.check("vlan_id")?;
        if self.namespace.is_empty() {
            return Err(SettingsError::EmptyNamespace);
        }
        Ok(())
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Rule names understood by [`Rules::resolve`].
pub const RULE_NAMES: &[&str] = &[
    "required",
    "hostname",
    "host",
    "mac_address",
    "ip_address",
    "ip4",
    "ip4_cidr",
    "ip6",
    "ip6_cidr",
    "ip4_subnet_mask",
    "ip4_mtu",
    "ip6_mtu",
    "hexadecimal",
    "uci_name",
    "vlan_id",
    "port",
    "port_range",
    "lease_time",
    "password",
    "equal",
];

/// Builds rules from [`RuleSettings`].
///
/// # Examples
///
/// ```
/// use netpanel_validator::settings::{RuleSettings, Rules};
///
/// let rules = Rules::new(RuleSettings::default()).unwrap();
/// let vlan = rules.resolve("vlan_id", None).unwrap();
/// assert!(vlan.validate("10").is_ok());
/// assert!(rules.resolve("teleport", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rules {
    settings: RuleSettings,
}

impl Rules {
    /// Checks the settings and wraps them.
    pub fn new(settings: RuleSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings in use.
    pub const fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// An empty bag using the configured namespace.
    pub fn message_bag(&self) -> MessageBag {
        MessageBag::with_namespace(self.settings.namespace.clone())
    }

    /// The port rule.
    pub const fn port(&self) -> Port {
        Port::new()
            .min(self.settings.port_min)
            .max(self.settings.port_max)
    }

    /// The port range rule.
    pub const fn port_range(&self) -> PortRange {
        PortRange::new(self.port())
    }

    /// The IPv4 MTU rule.
    pub fn ipv4_mtu(&self) -> Mtu {
        ipv4_mtu().bounds(self.settings.ipv4_mtu.range())
    }

    /// The IPv6 MTU rule.
    pub fn ipv6_mtu(&self) -> Mtu {
        ipv6_mtu().bounds(self.settings.ipv6_mtu.range())
    }

    /// The VLAN id rule.
    pub fn vlan_id(&self) -> VlanId {
        VlanId::new().bounds(self.settings.vlan_id.range())
    }

    /// The lease time rule.
    pub const fn lease_time(&self) -> LeaseTime {
        LeaseTime::new()
            .min_seconds(self.settings.lease_min_seconds)
            .min_minutes(self.settings.lease_min_minutes)
    }

    /// The password rule.
    pub const fn password(&self) -> Password {
        Password::new().min_length(self.settings.password_min_length)
    }

    /// The configuration name rule.
    pub const fn uci_name(&self) -> UciName {
        UciName::new(self.settings.uci_name_max_length)
    }

    /// Looks a rule up by name. `other` is the reference value of the
    /// `equal` rule and is ignored by the others.
    pub fn resolve(&self, name: &str, other: Option<&str>) -> Result<DynRule, SettingsError> {
        let rule = match name {
            "required" => required().boxed(),
            "hostname" => hostname().boxed(),
            "host" => host().boxed(),
            "mac_address" => mac_address().boxed(),
            "ip_address" => ip_address().boxed(),
            "ip4" => ipv4().boxed(),
            "ip4_cidr" => ipv4_cidr().boxed(),
            "ip6" => ipv6().boxed(),
            "ip6_cidr" => ipv6_cidr().boxed(),
            "ip4_subnet_mask" => ipv4_subnet_mask().boxed(),
            "ip4_mtu" => self.ipv4_mtu().boxed(),
            "ip6_mtu" => self.ipv6_mtu().boxed(),
            "hexadecimal" => hexadecimal().boxed(),
            "uci_name" => self.uci_name().boxed(),
            "vlan_id" => self.vlan_id().boxed(),
            "port" => self.port().boxed(),
            "port_range" => self.port_range().boxed(),
            "lease_time" => self.lease_time().boxed(),
            "password" => self.password().boxed(),
            "equal" => {
                let other = other.ok_or_else(|| SettingsError::MissingOther(name.to_owned()))?;
                equals(other).boxed()
            }
            _ => return Err(SettingsError::UnknownRule(name.to_owned())),
        };
        Ok(rule)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RuleSettings::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let settings = RuleSettings {
            vlan_id: Bounds::new(10, 1),
            ..RuleSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvertedRange {
                setting: "vlan_id",
                min: 10,
                max: 1
            })
        );
        assert!(Rules::new(settings).is_err());
    }

    #[test]
    fn inverted_ports_are_rejected() {
        let settings = RuleSettings {
            port_min: 2000,
            port_max: 1000,
            ..RuleSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvertedRange { setting: "port", .. })
        ));
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let settings = RuleSettings {
            namespace: String::new(),
            ..RuleSettings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyNamespace));
    }

    #[test]
    fn every_listed_name_resolves() {
        let rules = Rules::default();
        for name in RULE_NAMES {
            assert!(rules.resolve(name, Some("x")).is_ok(), "{name}");
        }
    }

    #[test]
    fn unknown_and_incomplete_rules() {
        let rules = Rules::default();
        assert_eq!(
            rules.resolve("teleport", None).err(),
            Some(SettingsError::UnknownRule("teleport".into()))
        );
        assert_eq!(
            rules.resolve("equal", None).err(),
            Some(SettingsError::MissingOther("equal".into()))
        );
    }

    #[rstest]
    #[case("port", "1023", false)]
    #[case("port", "1024", true)]
    #[case("port_range", "1024-2048", true)]
    #[case("port_range", "80,1024", false)]
    #[case("vlan_id", "200", false)]
    #[case("vlan_id", "100", true)]
    #[case("password", "aB1!aB1!aB", false)]
    #[case("uci_name", "abcd", false)]
    fn settings_flow_into_rules(#[case] name: &str, #[case] value: &str, #[case] ok: bool) {
        let settings = RuleSettings {
            port_min: 1024,
            vlan_id: Bounds::new(1, 100),
            password_min_length: 12,
            uci_name_max_length: Some(3),
            ..RuleSettings::default()
        };
        let rules = Rules::new(settings).unwrap();
        let rule = rules.resolve(name, None).unwrap();
        assert_eq!(rule.validate(value).is_ok(), ok, "{name}({value})");
    }

    #[test]
    fn message_bag_uses_namespace() {
        let settings = RuleSettings {
            namespace: "form".into(),
            ..RuleSettings::default()
        };
        let rules = Rules::new(settings).unwrap();
        let mut bag = rules.message_bag();
        bag.set("vlan", "invalid_vlan_id");
        assert_eq!(bag.first_i18n_key_for("vlan"), "form.invalid_vlan_id");
    }

    #[test]
    fn deserializes_partial_documents() {
        let settings: RuleSettings =
            serde_json::from_str(r#"{ "ipv4_mtu": { "min": 1000, "max": 1500 } }"#).unwrap();
        assert_eq!(settings.ipv4_mtu, Bounds::new(1000, 1500));
        assert_eq!(settings.ipv6_mtu, Bounds::new(1280, 9200));
    }
}
