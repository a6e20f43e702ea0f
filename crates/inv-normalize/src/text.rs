//! Defensive string coercion shared by every validator.

/// Trims a possibly-absent cell value. Absent input becomes an empty string.
pub fn trim_field(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// True when every character is an ASCII hex digit and the string is non-empty.
pub(crate) fn is_hex(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_hexdigit())
}
