//! Field-scoped validation error codes.
//!
//! Every code has a stable snake_case identity. Downstream consumers of the
//! anomaly report key on these strings, so they must never change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IPv4 validation failures, in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ipv4Error {
    EmptyString,
    Ipv6OrMixedNonIpv4,
    NoOctetSeparation,
    WrongPartCount,
    EmptyOctet,
    NonNumericOrNegative,
    NonDecimalFormat,
    OctetOutOfRange,
}

impl Ipv4Error {
    pub const ALL: [Self; 8] = [
        Self::EmptyString,
        Self::Ipv6OrMixedNonIpv4,
        Self::NoOctetSeparation,
        Self::WrongPartCount,
        Self::EmptyOctet,
        Self::NonNumericOrNegative,
        Self::NonDecimalFormat,
        Self::OctetOutOfRange,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyString => "empty_string",
            Self::Ipv6OrMixedNonIpv4 => "ipv6_or_mixed_non_ipv4",
            Self::NoOctetSeparation => "no_octet_separation",
            Self::WrongPartCount => "wrong_part_count",
            Self::EmptyOctet => "empty_octet",
            Self::NonNumericOrNegative => "non_numeric_or_negative",
            Self::NonDecimalFormat => "non_decimal_format",
            Self::OctetOutOfRange => "octet_out_of_range",
        }
    }
}

/// MAC address validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacError {
    Missing,
    EmptyString,
    MixedSeparators,
    WrongGroupCount,
    BadOctetHex,
    WrongGroupCountDot,
    BadGroupHexDot,
    NonHexChars,
    WrongLengthNoSeparators,
    #[serde(rename = "not_6_or_8_octets")]
    Not6Or8Octets,
}

impl MacError {
    pub const ALL: [Self; 10] = [
        Self::Missing,
        Self::EmptyString,
        Self::MixedSeparators,
        Self::WrongGroupCount,
        Self::BadOctetHex,
        Self::WrongGroupCountDot,
        Self::BadGroupHexDot,
        Self::NonHexChars,
        Self::WrongLengthNoSeparators,
        Self::Not6Or8Octets,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::EmptyString => "empty_string",
            Self::MixedSeparators => "mixed_separators",
            Self::WrongGroupCount => "wrong_group_count",
            Self::BadOctetHex => "bad_octet_hex",
            Self::WrongGroupCountDot => "wrong_group_count_dot",
            Self::BadGroupHexDot => "bad_group_hex_dot",
            Self::NonHexChars => "non_hex_chars",
            Self::WrongLengthNoSeparators => "wrong_length_no_separators",
            Self::Not6Or8Octets => "not_6_or_8_octets",
        }
    }
}

/// Hostname label and FQDN validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsError {
    EmptyString,
    EmptyLabel,
    EmptyLabelInSequence,
    IdnaEncodeFailed,
    LabelTooLong,
    LabelStartsOrEndsWithHyphen,
    InvalidCharacters,
    RequiresAtLeastTwoLabels,
    NumericTldForbidden,
    FqdnTooLong,
}

impl DnsError {
    pub const ALL: [Self; 10] = [
        Self::EmptyString,
        Self::EmptyLabel,
        Self::EmptyLabelInSequence,
        Self::IdnaEncodeFailed,
        Self::LabelTooLong,
        Self::LabelStartsOrEndsWithHyphen,
        Self::InvalidCharacters,
        Self::RequiresAtLeastTwoLabels,
        Self::NumericTldForbidden,
        Self::FqdnTooLong,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyString => "empty_string",
            Self::EmptyLabel => "empty_label",
            Self::EmptyLabelInSequence => "empty_label_in_sequence",
            Self::IdnaEncodeFailed => "idna_encode_failed",
            Self::LabelTooLong => "label_too_long",
            Self::LabelStartsOrEndsWithHyphen => "label_starts_or_ends_with_hyphen",
            Self::InvalidCharacters => "invalid_characters",
            Self::RequiresAtLeastTwoLabels => "requires_at_least_two_labels",
            Self::NumericTldForbidden => "numeric_tld_forbidden",
            Self::FqdnTooLong => "fqdn_too_long",
        }
    }
}

/// Site-name canonicalization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteError {
    /// The input was absent or blank before any transform ran.
    MissingSite,
    /// The transform produced an empty name.
    #[serde(rename = "Missing site fields")]
    MissingSiteFields,
}

impl SiteError {
    pub const ALL: [Self; 2] = [
        Self::MissingSite,
        Self::MissingSiteFields,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSite => "missing_site",
            Self::MissingSiteFields => "Missing site fields",
        }
    }

    /// Snake-case form used in step names.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::MissingSite => "missing_site",
            Self::MissingSiteFields => "missing_site_fields",
        }
    }
}

/// Gaps in a structured-extraction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionIssue {
    #[serde(rename = "Missing owner fields")]
    MissingOwnerFields,
    #[serde(rename = "Missing device fields")]
    MissingDeviceFields,
}

impl ExtractionIssue {
    pub const ALL: [Self; 2] = [
        Self::MissingOwnerFields,
        Self::MissingDeviceFields,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingOwnerFields => "Missing owner fields",
            Self::MissingDeviceFields => "Missing device fields",
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::MissingOwnerFields => "missing_owner_fields",
            Self::MissingDeviceFields => "missing_device_fields",
        }
    }
}

/// Closed union of every field-scoped code.
///
/// Serializes as the bare code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Ipv4(Ipv4Error),
    Mac(MacError),
    Dns(DnsError),
    Site(SiteError),
    Extraction(ExtractionIssue),
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4(code) => code.as_str(),
            Self::Mac(code) => code.as_str(),
            Self::Dns(code) => code.as_str(),
            Self::Site(code) => code.as_str(),
            Self::Extraction(code) => code.as_str(),
        }
    }

    /// Snake-case form of the code. Identical to [`as_str`](Self::as_str)
    /// except for the site and extraction issues, which report as prose.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Site(code) => code.slug(),
            Self::Extraction(code) => code.slug(),
            _ => self.as_str(),
        }
    }
}

macro_rules! code_display_and_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for ErrorCode {
                fn from(code: $ty) -> Self {
                    Self::$variant(code)
                }
            }
        )*
    };
}

code_display_and_from!(
    Ipv4Error => Ipv4,
    MacError => Mac,
    DnsError => Dns,
    SiteError => Site,
    ExtractionIssue => Extraction,
);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
