//! MessageBag behaviour as seen by form code.

use netpanel_validator::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn accumulates_per_field() {
    let mut bag = MessageBag::new();
    bag.set("vlan", "invalid_vlan_id");
    bag.set("vlan", "invalid_port");

    assert_eq!(bag.first_for("vlan"), "invalid_vlan_id");
    assert_eq!(bag.get("vlan").len(), 2);
    assert_eq!(bag.get("vlan"), ["invalid_vlan_id", "invalid_port"]);
    assert_eq!(bag.first_i18n_key_for("vlan"), "error.invalid_vlan_id");
    assert_eq!(bag.first_for("unset"), "");
}

#[test]
fn violations_from_rules_go_straight_in() {
    let mut bag = MessageBag::new();
    for (field, result) in [
        ("hostname", hostname().validate("-")),
        ("mask", ipv4_subnet_mask().validate("255.255.255.0")),
        ("key", hexadecimal().validate("abc")),
    ] {
        if let Err(v) = result {
            bag.set(field, v);
        }
    }
    let fields: Vec<_> = bag.iter().map(|(k, _)| k).collect();
    assert_eq!(fields, ["hostname", "key"]);
}

proptest! {
    #[test]
    fn first_for_is_first_inserted(codes in prop::collection::vec("[a-z_]{1,12}", 1..8)) {
        let mut bag = MessageBag::new();
        for code in &codes {
            bag.set("field", code.as_str());
        }
        prop_assert_eq!(bag.first_for("field"), codes[0].as_str());
        prop_assert_eq!(bag.get("field"), codes.as_slice());
    }

    #[test]
    fn keys_exist_only_with_entries(key in "[a-z]{1,8}", n in 0usize..4) {
        let mut bag = MessageBag::new();
        bag.set(key.as_str(), vec!["required"; n]);
        prop_assert_eq!(bag.contains(&key), n > 0);
        prop_assert_eq!(bag.get(&key).len(), n);
    }

    #[test]
    fn namespaced_codes_pass_through(ns in "[a-z]{1,8}", code in "[a-z_]{1,12}") {
        let mut bag = MessageBag::new();
        let qualified = format!("{ns}.{code}");
        bag.set("f", qualified.as_str());
        prop_assert_eq!(bag.first_i18n_key_for("f"), qualified);
    }
}
