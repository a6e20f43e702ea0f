//! Site-name canonicalization.
//!
//! Expands well-known abbreviations, folds separators into single hyphens and
//! title-cases the result: `"HQ_Bldg 2"` becomes `"Headquarters-Building-2"`.

use std::sync::LazyLock;

use inv_model::{Label, Labeled, SiteError, StepTrace};
use regex::Regex;

use crate::text::trim_field;

/// Case-insensitive whole-word expansions.
const ABBREVIATIONS: [(&str, &str); 6] = [
    ("Bldg", "Building"),
    ("BLR", "Bangalore"),
    ("DC", "Datacenter"),
    ("HQ", "Headquarters"),
    ("Lab", "Laboratory"),
    ("Campus", "Campus"),
];

/// A word is a run of letters and digits; `_`, `-` and spaces separate words.
static WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid word regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ _]+").expect("valid separator regex"));

static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen regex"));

/// Result of [`normalize_site_name`]: the labeled value plus the steps taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteNormalization {
    pub labeled: Labeled<SiteError>,
    pub steps: StepTrace,
}

impl SiteNormalization {
    pub fn is_ok(&self) -> bool {
        self.labeled.is_ok()
    }

    pub fn issue(&self) -> Option<SiteError> {
        self.labeled.label.error().copied()
    }
}

/// Canonicalizes a site name.
///
/// An absent or empty cell is `missing_site` without running any transform.
/// A transform that leaves nothing behind, such as on a whitespace-only
/// cell, is `missing_site_fields`, and the trimmed input is returned in its
/// place.
pub fn normalize_site_name(site: Option<&str>) -> SiteNormalization {
    let Some(raw) = site.filter(|raw| !raw.is_empty()) else {
        return SiteNormalization {
            labeled: Labeled::invalid(String::new(), SiteError::MissingSite),
            steps: StepTrace::new().with("site_invalid_missing_site"),
        };
    };
    let original = trim_field(Some(raw));

    let mut steps = StepTrace::new();
    let mut value = expand_abbreviations(&original);
    steps.push("site_replace_common_abbreviations");

    value = SEPARATORS.replace_all(&value, "-").into_owned();
    steps.push("site_replace_separators_with_hyphen");

    value = HYPHEN_RUNS.replace_all(&value, "-").into_owned();
    steps.push("site_collapse_hyphens");

    value = title_case(&value);
    steps.push("site_capitalize");

    if value.is_empty() {
        steps.push("site_invalid_missing_site_fields");
        return SiteNormalization {
            labeled: Labeled::invalid(original, SiteError::MissingSiteFields),
            steps,
        };
    }
    SiteNormalization {
        labeled: Labeled {
            value,
            label: Label::Ok,
        },
        steps,
    }
}

fn expand_abbreviations(value: &str) -> String {
    WORDS
        .replace_all(value, |caps: &regex::Captures<'_>| {
            let word = &caps[0];
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| abbr.eq_ignore_ascii_case(word))
                .map_or(word, |(_, full)| *full)
                .to_string()
        })
        .into_owned()
}

/// Uppercases the first letter of every letter run and lowercases the rest.
/// Any non-letter, digits included, starts a new run.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}
