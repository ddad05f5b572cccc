//! Documented boundary values, checked through the public API.

use netpanel_validator::checks::*;
use netpanel_validator::foundation::ParamValue;
use netpanel_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn code(result: ValidationResult) -> Option<String> {
    result.err().map(Violation::into_code)
}

#[rstest]
#[case("255.255.255.255", None)]
#[case("256.0.0.1", Some("invalid_ip_v4_address"))]
fn ip4_boundaries(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(code(validate_ip4_address(value)).as_deref(), expected);
}

#[rstest]
#[case("10.0.0.0/32", None)]
#[case("10.0.0.0/33", Some("invalid_cidr_v4_address"))]
fn ip4_cidr_boundaries(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(code(validate_ip4_cidr(value)).as_deref(), expected);
}

#[rstest]
#[case("1", true)]
#[case("4094", true)]
#[case("0", false)]
#[case("4095", false)]
fn vlan_boundaries(#[case] value: &str, #[case] ok: bool) {
    assert_eq!(validate_vlan_id(value).is_ok(), ok);
}

#[rstest]
#[case("119s", Some("invalid_lease_time_duration"))]
#[case("120s", None)]
#[case("infinity", None)]
fn lease_boundaries(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(code(validate_lease_time(value)).as_deref(), expected);
}

#[rstest]
#[case("abcdefgH1", Some("password_special_character_required"))]
#[case("abcdefgH1!", None)]
fn password_boundaries(#[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(code(validate_password(value)).as_deref(), expected);
}

#[test]
fn uci_name_length_parameter() {
    let err = validate_uci_name("my_name", 5).unwrap_err();
    assert_eq!(err.code(), "maximum_num_characters_allowed");
    assert_eq!(err.param("num"), Some(&ParamValue::Int(5)));
    assert_eq!(err.i18n_key(), "error.maximum_num_characters_allowed");
}

#[test]
fn hostname_length_is_checked_first() {
    let long = format!("{}.lan", "a".repeat(250));
    assert_eq!(
        code(validate_hostname(&long)).as_deref(),
        Some("hostname_is_too_long")
    );
    // Composites still report the generic identifier.
    assert_eq!(code(validate_host(&long)).as_deref(), Some("invalid_host"));
}

#[rstest]
#[case("router", true)]
#[case("router.lan", true)]
#[case("10.0.0.1", true)]
#[case("2001:db8::1", true)]
#[case("10.0.0.256", false)]
#[case("-router", false)]
#[case("", false)]
fn host_accepts_names_and_addresses(#[case] value: &str, #[case] ok: bool) {
    assert_eq!(validate_host(value).is_ok(), ok, "{value}");
}

#[test]
fn mtu_families() {
    assert!(validate_ip4_mtu("1280").is_ok());
    assert!(validate_ip6_mtu("1280").is_ok());
    assert!(validate_ip4_mtu("576").is_ok());
    assert_eq!(
        code(validate_ip6_mtu("576")).as_deref(),
        Some("invalid_ip_v6_mtu")
    );
}

#[test]
fn settings_from_json_drive_a_form() {
    let settings: RuleSettings =
        serde_json::from_str(r#"{ "vlan_id": { "min": 100, "max": 199 }, "namespace": "net" }"#)
            .unwrap();
    let rules = Rules::new(settings).unwrap();

    let mut form = FormCheck::with_bag(rules.message_bag());
    form.check("vlan", "42", &rules.vlan_id());
    form.check("mtu", "1500", &rules.ipv4_mtu());

    assert!(form.finish().is_err());
    assert_eq!(form.bag().first_i18n_key_for("vlan"), "net.invalid_vlan_id");
    assert!(!form.bag().contains("mtu"));
}
