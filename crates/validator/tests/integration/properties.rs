//! Property-based tests for the rules.

use netpanel_validator::prelude::*;
use netpanel_validator::settings::RULE_NAMES;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn every_named_rule_is_idempotent(s in ".{0,40}") {
        let rules = Rules::default();
        for name in RULE_NAMES {
            let rule = rules.resolve(name, Some("other")).unwrap();
            prop_assert_eq!(rule.validate(&s), rule.validate(&s), "{}", name);
        }
    }

    #[test]
    fn invalid_always_carries_a_code(s in ".{0,40}") {
        let rules = Rules::default();
        for name in RULE_NAMES {
            if let Err(v) = rules.resolve(name, Some("other")).unwrap().validate(&s) {
                prop_assert!(!v.code().is_empty());
            }
        }
    }
}

// ============================================================================
// COMPOSITE LAWS
// ============================================================================

fn host_like() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,20}",
        "[a-z0-9_.-]{1,20}",
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        "[0-9a-f:]{2,20}",
    ]
}

proptest! {
    #[test]
    fn host_is_hostname_or_ip(s in host_like()) {
        let expected = hostname().validate(&s).is_ok() || ip_address().validate(&s).is_ok();
        prop_assert_eq!(host().validate(&s).is_ok(), expected);
    }

    #[test]
    fn ip_address_is_v4_or_v6(s in host_like()) {
        let expected = ipv4().validate(&s).is_ok() || ipv6().validate(&s).is_ok();
        prop_assert_eq!(ip_address().validate(&s).is_ok(), expected);
    }

    #[test]
    fn single_ports_are_port_ranges(n in 0u32..70_000) {
        let s = n.to_string();
        prop_assert_eq!(port().validate(&s).is_ok(), port_range().validate(&s).is_ok());
    }

    #[test]
    fn vlan_accepts_exactly_its_range(n in -10i64..5000) {
        prop_assert_eq!(vlan_id().validate(&n.to_string()).is_ok(), (1..=4094).contains(&n));
    }

    #[test]
    fn octets_in_range_are_ipv4(a in 0u16..=255, b in 0u16..=255, c in 0u16..=255, d in 0u16..=255) {
        let s = format!("{a}.{b}.{c}.{d}");
        prop_assert!(ipv4().validate(&s).is_ok());
        let cidr = format!("{s}/24");
        prop_assert!(ipv4_cidr().validate(&cidr).is_ok());
    }
}
