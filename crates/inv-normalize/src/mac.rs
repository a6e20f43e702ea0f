//! MAC address validation and EUI classification.
//!
//! Accepted spellings, all normalized to lowercase colon-separated octets:
//!
//! - `aa:bb:cc:dd:ee:ff` and `aa-bb-cc-dd-ee-ff` (6 or 8 groups)
//! - `aabb.ccdd.eeff` Cisco style (3 or 4 groups)
//! - `aabbccddeeff` bare hex (12 or 16 digits)

use inv_model::{Label, Labeled, MacError, MacKind};

use crate::text::{is_hex, trim_field};

/// Validates and canonicalizes a MAC address. `None` is reported as `missing`.
pub fn validate_and_label_mac(mac: Option<&str>) -> Labeled<MacError> {
    let Some(raw) = mac else {
        return Labeled::invalid("", MacError::Missing);
    };
    let s = trim_field(Some(raw));
    if s.is_empty() {
        return Labeled::invalid(s, MacError::EmptyString);
    }

    let has_colon = s.contains(':');
    let has_dash = s.contains('-');
    let has_dot = s.contains('.');
    if [has_colon, has_dash, has_dot].iter().filter(|&&present| present).count() > 1 {
        return Labeled::invalid(s, MacError::MixedSeparators);
    }

    let octets = if has_colon || has_dash {
        let separator = if has_colon { ':' } else { '-' };
        split_separated(&s, separator)
    } else if has_dot {
        split_dotted(&s)
    } else {
        split_bare(&s)
    };
    let octets = match octets {
        Ok(octets) => octets,
        Err(code) => return Labeled::invalid(s, code),
    };
    if !matches!(octets.len(), 6 | 8) {
        return Labeled::invalid(s, MacError::Not6Or8Octets);
    }
    Labeled::ok(octets.join(":"))
}

fn split_separated(s: &str, separator: char) -> Result<Vec<String>, MacError> {
    let groups: Vec<&str> = s.split(separator).collect();
    if !matches!(groups.len(), 6 | 8) {
        return Err(MacError::WrongGroupCount);
    }
    groups
        .into_iter()
        .map(|group| {
            let group = group.trim();
            if group.len() == 2 && is_hex(group) {
                Ok(group.to_ascii_lowercase())
            } else {
                Err(MacError::BadOctetHex)
            }
        })
        .collect()
}

fn split_dotted(s: &str) -> Result<Vec<String>, MacError> {
    let groups: Vec<&str> = s.split('.').collect();
    if !matches!(groups.len(), 3 | 4) {
        return Err(MacError::WrongGroupCountDot);
    }
    let mut octets = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        let group = group.trim();
        if group.len() != 4 || !is_hex(group) {
            return Err(MacError::BadGroupHexDot);
        }
        let lower = group.to_ascii_lowercase();
        octets.push(lower[..2].to_string());
        octets.push(lower[2..].to_string());
    }
    Ok(octets)
}

fn split_bare(s: &str) -> Result<Vec<String>, MacError> {
    if !is_hex(s) {
        return Err(MacError::NonHexChars);
    }
    if !matches!(s.len(), 12 | 16) {
        return Err(MacError::WrongLengthNoSeparators);
    }
    let lower = s.to_ascii_lowercase();
    Ok((0..lower.len())
        .step_by(2)
        .map(|start| lower[start..start + 2].to_string())
        .collect())
}

/// `eui48` for 6 octets, `eui64` for 8, otherwise `unclassified`.
pub fn classify_mac(mac: &str, label: &Label<MacError>) -> MacKind {
    if *label != Label::Ok {
        return MacKind::Unclassified;
    }
    match mac.split(':').count() {
        6 => MacKind::Eui48,
        8 => MacKind::Eui64,
        _ => MacKind::Unclassified,
    }
}
