//! Tests for the MAC, DNS and site engines through the public API.

use inv_model::{DnsError, DnsKind, FqdnOptions, Label, MacError, MacKind, SiteError};
use inv_normalize::{
    classify_fqdn, classify_hostname_label, classify_mac, normalize_site_name,
    validate_and_label_fqdn, validate_and_label_hostname_label, validate_and_label_mac,
};

#[test]
fn mac_colon_form() {
    let result = validate_and_label_mac(Some("00:1A:2b:3C:4d:5E"));
    assert_eq!(result.value, "00:1a:2b:3c:4d:5e");
    assert_eq!(classify_mac(&result.value, &result.label), MacKind::Eui48);
}

#[test]
fn mac_failure_codes() {
    let cases = [
        ("", MacError::EmptyString),
        ("aa:bb-cc:dd:ee:ff", MacError::MixedSeparators),
        ("aa:bb:cc:dd:ee", MacError::WrongGroupCount),
        ("aa:bb:cc:dd:ee:fg", MacError::BadOctetHex),
        ("aabb.ccdd", MacError::WrongGroupCountDot),
        ("aabb.ccdd.eef", MacError::BadGroupHexDot),
        ("aabbccddeefz", MacError::NonHexChars),
        ("aabbccddee", MacError::WrongLengthNoSeparators),
    ];
    for (raw, code) in cases {
        let result = validate_and_label_mac(Some(raw));
        assert_eq!(result.label, Label::Invalid(code), "{raw}");
        assert_eq!(result.value, raw, "{raw}");
        assert_eq!(
            classify_mac(&result.value, &result.label),
            MacKind::Unclassified
        );
    }
}

#[test]
fn mac_missing() {
    let result = validate_and_label_mac(None);
    assert_eq!(result.label, Label::Invalid(MacError::Missing));
    assert_eq!(result.value, "");
}

#[test]
fn hostname_empty() {
    let result = validate_and_label_hostname_label(Some(""), false);
    assert_eq!(result.label, Label::Invalid(DnsError::EmptyString));
    assert_eq!(
        classify_hostname_label(&result.value, &result.label),
        DnsKind::Unclassified
    );
}

#[test]
fn fqdn_absolute_example() {
    let result = validate_and_label_fqdn(Some("API.Example.COM."), FqdnOptions::default());
    assert_eq!(result.value, "api.example.com");
    assert_eq!(result.label, Label::OkAbsolute);
    assert!(result.is_ok());
    assert_eq!(
        classify_fqdn(&result.value, &result.label),
        DnsKind::AbsoluteFqdn
    );
}

#[test]
fn fqdn_idempotent_on_canonical_output() {
    let once = validate_and_label_fqdn(Some("Bücher.Example.org"), FqdnOptions::default());
    assert_eq!(once.value, "xn--bcher-kva.example.org");
    let twice = validate_and_label_fqdn(Some(&once.value), FqdnOptions::default());
    assert_eq!(once, twice);
}

#[test]
fn fqdn_label_too_long() {
    let name = format!("{}.example.com", "x".repeat(64));
    let result = validate_and_label_fqdn(Some(&name), FqdnOptions::default());
    assert_eq!(result.label, Label::Invalid(DnsError::LabelTooLong));
    assert_eq!(result.value, name);
}

#[test]
fn site_example() {
    let result = normalize_site_name(Some("HQ_Bldg 2"));
    assert_eq!(result.labeled.value, "Headquarters-Building-2");
    assert_eq!(result.issue(), None);
}

#[test]
fn site_missing() {
    let result = normalize_site_name(None);
    assert_eq!(result.issue(), Some(SiteError::MissingSite));

    let blank = normalize_site_name(Some(" \t "));
    assert_eq!(blank.issue(), Some(SiteError::MissingSiteFields));
    assert_eq!(blank.labeled.value, "");
}

#[test]
fn site_abbreviations_split_on_underscores() {
    let once = normalize_site_name(Some("blr dc_lab")).labeled.value;
    assert_eq!(once, "Bangalore-Datacenter-Laboratory");
    assert_eq!(normalize_site_name(Some(&once)).labeled.value, once);
}
