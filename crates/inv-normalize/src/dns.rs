//! Hostname label and FQDN validation (IDNA + RFC 1123).
//!
//! Labels are converted to their ASCII-compatible form first, lowercased, and
//! only then checked against the RFC 1123 label rules. The FQDN validator
//! additionally tracks the trailing root dot and the 253 character limit.

use inv_model::{DnsError, DnsKind, FqdnOptions, Label, Labeled};

use crate::text::trim_field;

/// Longest permitted label, in ASCII characters.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest permitted name, joined with dots and without the root dot.
pub const MAX_FQDN_LEN: usize = 253;

/// Converts one (possibly Unicode) label to lowercase ASCII.
///
/// ASCII labels pass through untouched apart from case; anything else goes
/// through UTS 46 to-ASCII. A conversion that fails, or that maps the label
/// onto more than one label (for example an ideographic full stop), is
/// `idna_encode_failed`.
pub fn label_to_ascii(label: &str) -> Result<String, DnsError> {
    if label.is_ascii() {
        return Ok(label.to_ascii_lowercase());
    }
    let ascii = idna::domain_to_ascii(label).map_err(|_| DnsError::IdnaEncodeFailed)?;
    if ascii.is_empty() || ascii.contains('.') {
        return Err(DnsError::IdnaEncodeFailed);
    }
    Ok(ascii.to_ascii_lowercase())
}

/// Checks an ASCII label against RFC 1123.
pub fn validate_label_ascii(label: &str, allow_underscore: bool) -> Result<(), DnsError> {
    if label.is_empty() {
        return Err(DnsError::EmptyLabel);
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(DnsError::LabelTooLong);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(DnsError::LabelStartsOrEndsWithHyphen);
    }
    let allowed = |ch: char| {
        ch.is_ascii_alphanumeric() || ch == '-' || (allow_underscore && ch == '_')
    };
    if label.chars().all(allowed) {
        Ok(())
    } else {
        Err(DnsError::InvalidCharacters)
    }
}

fn normalize_label(label: &str, allow_underscore: bool) -> Result<String, DnsError> {
    let ascii = label_to_ascii(label)?;
    validate_label_ascii(&ascii, allow_underscore)?;
    Ok(ascii)
}

/// Validates a single hostname label.
///
/// Returns the lowercase ASCII label on success, or the trimmed input with
/// the failing code.
pub fn validate_and_label_hostname_label(
    label: Option<&str>,
    allow_underscore: bool,
) -> Labeled<DnsError> {
    let s = trim_field(label);
    if s.is_empty() {
        return Labeled::invalid(s, DnsError::EmptyString);
    }
    match normalize_label(&s, allow_underscore) {
        Ok(ascii) => Labeled::ok(ascii),
        Err(code) => Labeled::invalid(s, code),
    }
}

pub fn classify_hostname_label(_label: &str, validation: &Label<DnsError>) -> DnsKind {
    if *validation == Label::Ok {
        DnsKind::SingleLabel
    } else {
        DnsKind::Unclassified
    }
}

/// Validates a hostname or FQDN such as `api.example.com` or `api.example.com.`.
///
/// On success the value is the dot-joined lowercase ASCII labels without the
/// root dot, labeled `ok_absolute` when the root dot was present. Every
/// failure returns the original, untrimmed input.
pub fn validate_and_label_fqdn(name: Option<&str>, options: FqdnOptions) -> Labeled<DnsError> {
    let original = name.unwrap_or_default();
    let s = trim_field(name);
    if s.is_empty() {
        return Labeled::invalid(original, DnsError::EmptyString);
    }

    let (body, absolute) = match s.strip_suffix('.') {
        Some(stripped) => (stripped, true),
        None => (s.as_str(), false),
    };
    let raw_labels: Vec<&str> = body.split('.').collect();
    if raw_labels.iter().any(|label| label.is_empty()) {
        return Labeled::invalid(original, DnsError::EmptyLabelInSequence);
    }

    let mut labels = Vec::with_capacity(raw_labels.len());
    for raw in raw_labels {
        match normalize_label(raw, options.allow_underscore) {
            Ok(ascii) => labels.push(ascii),
            Err(code) => return Labeled::invalid(original, code),
        }
    }

    if options.require_at_least_two_labels && labels.len() < 2 {
        return Labeled::invalid(original, DnsError::RequiresAtLeastTwoLabels);
    }
    if options.forbid_numeric_tld
        && labels
            .last()
            .is_some_and(|tld| tld.bytes().all(|b| b.is_ascii_digit()))
    {
        return Labeled::invalid(original, DnsError::NumericTldForbidden);
    }

    let joined = labels.join(".");
    if joined.len() > MAX_FQDN_LEN {
        return Labeled::invalid(original, DnsError::FqdnTooLong);
    }
    if absolute {
        Labeled::ok_absolute(joined)
    } else {
        Labeled::ok(joined)
    }
}

pub fn classify_fqdn(name: &str, validation: &Label<DnsError>) -> DnsKind {
    match validation {
        Label::OkAbsolute => DnsKind::AbsoluteFqdn,
        Label::Ok if name.contains('.') => DnsKind::Fqdn,
        Label::Ok => DnsKind::SingleLabel,
        Label::Invalid(_) => DnsKind::Unclassified,
    }
}

/// FQDN validation and classification in one call, for columns that may hold
/// either a bare hostname or a qualified name.
pub fn validate_and_label_dns_name(
    name: Option<&str>,
    options: FqdnOptions,
) -> (Labeled<DnsError>, DnsKind) {
    let labeled = validate_and_label_fqdn(name, options);
    let kind = classify_fqdn(&labeled.value, &labeled.label);
    (labeled, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_label_lowercases() {
        let result = validate_and_label_hostname_label(Some(" Web-01 "), false);
        assert_eq!(result, Labeled::ok("web-01"));
        assert_eq!(
            classify_hostname_label(&result.value, &result.label),
            DnsKind::SingleLabel
        );
    }

    #[test]
    fn hostname_label_rejects_dots_and_underscores() {
        let dotted = validate_and_label_hostname_label(Some("web.example.com"), false);
        assert_eq!(dotted.label, Label::Invalid(DnsError::InvalidCharacters));
        assert_eq!(dotted.value, "web.example.com");

        let underscored = validate_and_label_hostname_label(Some("web_01"), false);
        assert_eq!(underscored.label, Label::Invalid(DnsError::InvalidCharacters));
        let allowed = validate_and_label_hostname_label(Some("web_01"), true);
        assert_eq!(allowed.label, Label::Ok);
    }

    #[test]
    fn hostname_label_empty() {
        let result = validate_and_label_hostname_label(Some(""), false);
        assert_eq!(result, Labeled::invalid("", DnsError::EmptyString));
        let absent = validate_and_label_hostname_label(None, false);
        assert_eq!(absent.label, Label::Invalid(DnsError::EmptyString));
    }

    #[test]
    fn unicode_labels_are_punycoded() {
        let result = validate_and_label_hostname_label(Some("Bücher"), false);
        assert_eq!(result, Labeled::ok("xn--bcher-kva"));
    }

    #[test]
    fn label_rules() {
        assert_eq!(validate_label_ascii("", false), Err(DnsError::EmptyLabel));
        assert_eq!(
            validate_label_ascii(&"a".repeat(64), false),
            Err(DnsError::LabelTooLong)
        );
        assert_eq!(validate_label_ascii(&"a".repeat(63), false), Ok(()));
        assert_eq!(
            validate_label_ascii("-web", false),
            Err(DnsError::LabelStartsOrEndsWithHyphen)
        );
        assert_eq!(
            validate_label_ascii("web-", false),
            Err(DnsError::LabelStartsOrEndsWithHyphen)
        );
        assert_eq!(
            validate_label_ascii("we b", false),
            Err(DnsError::InvalidCharacters)
        );
    }

    #[test]
    fn fqdn_absolute() {
        let result = validate_and_label_fqdn(Some("API.Example.COM."), FqdnOptions::default());
        assert_eq!(result, Labeled::ok_absolute("api.example.com"));
        assert_eq!(
            classify_fqdn(&result.value, &result.label),
            DnsKind::AbsoluteFqdn
        );
    }

    #[test]
    fn fqdn_relative_and_single_label() {
        let fqdn = validate_and_label_fqdn(Some("db01.corp.local"), FqdnOptions::default());
        assert_eq!(classify_fqdn(&fqdn.value, &fqdn.label), DnsKind::Fqdn);
        let single = validate_and_label_fqdn(Some("db01"), FqdnOptions::default());
        assert_eq!(classify_fqdn(&single.value, &single.label), DnsKind::SingleLabel);
    }

    #[test]
    fn fqdn_failures_return_untrimmed_input() {
        let result = validate_and_label_fqdn(Some("  a..b  "), FqdnOptions::default());
        assert_eq!(result, Labeled::invalid("  a..b  ", DnsError::EmptyLabelInSequence));
        let bad = validate_and_label_fqdn(Some(" -a.example.com"), FqdnOptions::default());
        assert_eq!(
            bad,
            Labeled::invalid(" -a.example.com", DnsError::LabelStartsOrEndsWithHyphen)
        );
    }

    #[test]
    fn fqdn_lone_or_double_dot() {
        for raw in [".", "example.com..", ".example.com"] {
            let result = validate_and_label_fqdn(Some(raw), FqdnOptions::default());
            assert_eq!(
                result.label,
                Label::Invalid(DnsError::EmptyLabelInSequence),
                "{raw}"
            );
        }
    }

    #[test]
    fn fqdn_optional_rules() {
        let strict = FqdnOptions::strict();
        assert_eq!(
            validate_and_label_fqdn(Some("localhost"), strict).label,
            Label::Invalid(DnsError::RequiresAtLeastTwoLabels)
        );
        assert_eq!(
            validate_and_label_fqdn(Some("host.123"), strict).label,
            Label::Invalid(DnsError::NumericTldForbidden)
        );
        assert_eq!(
            validate_and_label_fqdn(Some("_sip._tcp.example.com"), FqdnOptions::default()).label,
            Label::Invalid(DnsError::InvalidCharacters)
        );
        let lenient = FqdnOptions::default().with_allow_underscore(true);
        assert_eq!(
            validate_and_label_fqdn(Some("_sip._tcp.example.com"), lenient).label,
            Label::Ok
        );
    }

    #[test]
    fn fqdn_length_boundary() {
        let base = format!("{0}.{0}.{0}", "a".repeat(63));
        let at_limit = format!("{base}.{}", "b".repeat(61));
        assert_eq!(at_limit.len(), 253);
        let result = validate_and_label_fqdn(Some(&at_limit), FqdnOptions::default());
        assert_eq!(result.label, Label::Ok);

        let over = format!("{base}.{}", "b".repeat(62));
        assert_eq!(over.len(), 254);
        let result = validate_and_label_fqdn(Some(&over), FqdnOptions::default());
        assert_eq!(result.label, Label::Invalid(DnsError::FqdnTooLong));

        let absolute = format!("{at_limit}.");
        let result = validate_and_label_fqdn(Some(&absolute), FqdnOptions::default());
        assert_eq!(result.label, Label::OkAbsolute);
    }

    #[test]
    fn dns_name_router() {
        let (labeled, kind) =
            validate_and_label_dns_name(Some("Mail.Example.org"), FqdnOptions::default());
        assert_eq!(labeled.value, "mail.example.org");
        assert_eq!(kind, DnsKind::Fqdn);
        let (_, kind) = validate_and_label_dns_name(Some(""), FqdnOptions::default());
        assert_eq!(kind, DnsKind::Unclassified);
    }
}
