//! IPv4 validation, classification and derived attributes.

use std::net::Ipv4Addr;

use inv_model::{Ipv4Class, Ipv4Error, Label, Labeled};

/// Validates a dotted-quad IPv4 address and re-serializes it canonically.
///
/// The input is expected to be trimmed already (see
/// [`trim_field`](crate::trim_field)); individual octets are trimmed again.
/// The canonical form drops leading zeros and `+` signs:
/// `"010.+1.0.255"` becomes `"10.1.0.255"`.
pub fn validate_and_label_ipv4(ip: &str) -> Labeled<Ipv4Error> {
    if ip.is_empty() {
        return Labeled::invalid(ip, Ipv4Error::EmptyString);
    }
    if ip.contains(':') {
        return Labeled::invalid(ip, Ipv4Error::Ipv6OrMixedNonIpv4);
    }
    if !ip.contains('.') {
        return Labeled::invalid(ip, Ipv4Error::NoOctetSeparation);
    }
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return Labeled::invalid(ip, Ipv4Error::WrongPartCount);
    }
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(&parts) {
        match parse_octet(part.trim()) {
            Ok(value) => *slot = value,
            Err(code) => return Labeled::invalid(ip, code),
        }
    }
    Labeled::ok(Ipv4Addr::from(octets).to_string())
}

fn parse_octet(part: &str) -> Result<u8, Ipv4Error> {
    if part.is_empty() {
        return Err(Ipv4Error::EmptyOctet);
    }
    let unsigned = part.trim_start_matches('+');
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Ipv4Error::NonNumericOrNegative);
    }
    // A single sign is part of decimal syntax; a run of them is not.
    if part.len() - unsigned.len() > 1 {
        return Err(Ipv4Error::NonDecimalFormat);
    }
    let significant = unsigned.trim_start_matches('0');
    if significant.len() > 3 {
        return Err(Ipv4Error::OctetOutOfRange);
    }
    let value: u16 = if significant.is_empty() {
        0
    } else {
        significant
            .parse()
            .map_err(|_| Ipv4Error::NonDecimalFormat)?
    };
    u8::try_from(value).map_err(|_| Ipv4Error::OctetOutOfRange)
}

fn canonical_octets(ip: &str, label: &Label<Ipv4Error>) -> Option<[u8; 4]> {
    if *label != Label::Ok {
        return None;
    }
    ip.parse::<Ipv4Addr>().ok().map(|addr| addr.octets())
}

/// Classifies a validated address. Anything not labeled `ok` is unclassified.
pub fn classify_ipv4(ip: &str, label: &Label<Ipv4Error>) -> Ipv4Class {
    let Some([a, b, c, d]) = canonical_octets(ip, label) else {
        return Ipv4Class::Unclassified;
    };
    match (a, b, c, d) {
        (0, 0, 0, 0) => Ipv4Class::Unspecified,
        (255, 255, 255, 255) => Ipv4Class::LimitedBroadcast,
        (127, ..) => Ipv4Class::Loopback,
        (169, 254, ..) => Ipv4Class::LinkLocalApipa,
        (224..=239, ..) => Ipv4Class::Multicast,
        (240..=255, ..) => Ipv4Class::Reserved,
        (10, ..) | (172, 16..=31, ..) | (192, 168, ..) => Ipv4Class::Private,
        _ => Ipv4Class::PublicOrOther,
    }
}

/// Reverse-DNS name, e.g. `1.2.0.192.in-addr.arpa`. Empty unless labeled `ok`.
pub fn determine_reverse_ptr_ipv4(ip: &str, label: &Label<Ipv4Error>) -> String {
    match canonical_octets(ip, label) {
        Some([a, b, c, d]) => format!("{d}.{c}.{b}.{a}.in-addr.arpa"),
        None => String::new(),
    }
}

/// Inferred subnet for the classes that imply one; empty for all others.
///
/// Public addresses deliberately get no inferred prefix.
pub fn determine_subnet(ip: &str, classification: Ipv4Class) -> String {
    let Ok(addr) = ip.parse::<Ipv4Addr>() else {
        return String::new();
    };
    let [a, b, c, _] = addr.octets();
    match classification {
        Ipv4Class::Loopback => format!("{a}.{b}.{c}.0/8"),
        Ipv4Class::Private => format!("{addr}/24"),
        Ipv4Class::LinkLocalApipa => format!("{a}.{b}.0.0/16"),
        Ipv4Class::Unspecified
        | Ipv4Class::LimitedBroadcast
        | Ipv4Class::Multicast
        | Ipv4Class::Reserved
        | Ipv4Class::PublicOrOther
        | Ipv4Class::Unclassified => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(ip: &str) -> Option<Ipv4Error> {
        validate_and_label_ipv4(ip).label.error().copied()
    }

    #[test]
    fn canonicalizes_leading_zeros_and_plus() {
        let result = validate_and_label_ipv4("010.+1.000.255");
        assert_eq!(result.value, "10.1.0.255");
        assert_eq!(result.label, Label::Ok);
    }

    #[test]
    fn octets_are_trimmed() {
        assert_eq!(validate_and_label_ipv4("192. 168 .1.1").value, "192.168.1.1");
    }

    #[test]
    fn check_order_matches_contract() {
        assert_eq!(code(""), Some(Ipv4Error::EmptyString));
        assert_eq!(code("fe80::1"), Some(Ipv4Error::Ipv6OrMixedNonIpv4));
        assert_eq!(code("::ffff:10.0.0.1"), Some(Ipv4Error::Ipv6OrMixedNonIpv4));
        assert_eq!(code("localhost"), Some(Ipv4Error::NoOctetSeparation));
        assert_eq!(code("10.0.0"), Some(Ipv4Error::WrongPartCount));
        assert_eq!(code("10.0..1"), Some(Ipv4Error::EmptyOctet));
        assert_eq!(code("10.0.-1.1"), Some(Ipv4Error::NonNumericOrNegative));
        assert_eq!(code("10.0.x.1"), Some(Ipv4Error::NonNumericOrNegative));
        assert_eq!(code("10.0.+.1"), Some(Ipv4Error::NonNumericOrNegative));
        assert_eq!(code("10.0.++1.1"), Some(Ipv4Error::NonDecimalFormat));
        assert_eq!(code("10.0.256.1"), Some(Ipv4Error::OctetOutOfRange));
    }

    #[test]
    fn failure_preserves_input() {
        let result = validate_and_label_ipv4("10.0.999.1");
        assert_eq!(result.value, "10.0.999.1");
    }

    #[test]
    fn huge_octets_do_not_overflow() {
        assert_eq!(
            code("1.2.3.99999999999999999999999"),
            Some(Ipv4Error::OctetOutOfRange)
        );
        assert_eq!(code("1.2.3.0000000000255"), None);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert_eq!(code("1.2.3.\u{0664}"), Some(Ipv4Error::NonNumericOrNegative));
    }

    #[test]
    fn classification_priority() {
        let cases = [
            ("0.0.0.0", Ipv4Class::Unspecified),
            ("255.255.255.255", Ipv4Class::LimitedBroadcast),
            ("127.0.0.1", Ipv4Class::Loopback),
            ("169.254.10.20", Ipv4Class::LinkLocalApipa),
            ("224.0.0.251", Ipv4Class::Multicast),
            ("239.255.255.250", Ipv4Class::Multicast),
            ("240.0.0.1", Ipv4Class::Reserved),
            ("255.255.255.254", Ipv4Class::Reserved),
            ("10.20.30.40", Ipv4Class::Private),
            ("172.16.0.1", Ipv4Class::Private),
            ("172.31.255.255", Ipv4Class::Private),
            ("172.32.0.1", Ipv4Class::PublicOrOther),
            ("192.168.1.10", Ipv4Class::Private),
            ("8.8.8.8", Ipv4Class::PublicOrOther),
        ];
        for (ip, expected) in cases {
            assert_eq!(classify_ipv4(ip, &Label::Ok), expected, "{ip}");
        }
    }

    #[test]
    fn unlabeled_input_is_unclassified() {
        let label = Label::Invalid(Ipv4Error::WrongPartCount);
        assert_eq!(classify_ipv4("10.0.0.1", &label), Ipv4Class::Unclassified);
        assert_eq!(determine_reverse_ptr_ipv4("10.0.0.1", &label), "");
    }

    #[test]
    fn subnet_table() {
        assert_eq!(determine_subnet("127.1.2.3", Ipv4Class::Loopback), "127.1.2.0/8");
        assert_eq!(determine_subnet("10.1.2.3", Ipv4Class::Private), "10.1.2.3/24");
        assert_eq!(
            determine_subnet("169.254.7.8", Ipv4Class::LinkLocalApipa),
            "169.254.0.0/16"
        );
        assert_eq!(determine_subnet("8.8.8.8", Ipv4Class::PublicOrOther), "");
        assert_eq!(determine_subnet("224.0.0.1", Ipv4Class::Multicast), "");
        assert_eq!(determine_subnet("not-an-ip", Ipv4Class::Private), "");
    }
}
