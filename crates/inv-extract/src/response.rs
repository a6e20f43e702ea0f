//! Turning model output into flat string fields.

use serde_json::Value;

use crate::Fields;
use crate::error::{ExtractError, Result};

/// Removes a Markdown code fence around the content, with or without a
/// `json` language tag.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses model output as a JSON object of scalar fields.
///
/// Strings are kept as is, numbers and booleans are rendered, `null` becomes
/// an empty string. Nested values keep their compact JSON text.
pub fn parse_fields(content: &str) -> Result<Fields> {
    let body = strip_code_fence(content);
    if body.is_empty() {
        return Err(ExtractError::EmptyResponse);
    }
    let value: Value =
        serde_json::from_str(body).map_err(|err| ExtractError::InvalidJson(err.to_string()))?;
    let Value::Object(map) = value else {
        return Err(ExtractError::InvalidJson(format!(
            "expected an object, got {}",
            kind_of(&value)
        )));
    };
    Ok(map
        .into_iter()
        .map(|(key, value)| (key, value_to_field(value)))
        .collect())
}

fn value_to_field(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
