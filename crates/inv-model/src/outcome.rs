//! Per-field processing outcome and its step trace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes::ErrorCode;

/// Every field the cleaner produces an outcome for, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Ip,
    Mac,
    Site,
    Hostname,
    Fqdn,
    Owner,
    Device,
}

impl FieldName {
    /// Processing (and report) order.
    pub const ALL: [FieldName; 7] = [
        Self::Ip,
        Self::Mac,
        Self::Site,
        Self::Hostname,
        Self::Fqdn,
        Self::Owner,
        Self::Device,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Mac => "mac",
            Self::Site => "site",
            Self::Hostname => "hostname",
            Self::Fqdn => "fqdn",
            Self::Owner => "owner",
            Self::Device => "device",
        }
    }

    /// Flattened attribute key, e.g. `ip_issues`.
    pub fn attribute(&self, suffix: &str) -> String {
        format!("{}_{suffix}", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, append-only log of the operations applied to one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    steps: Vec<String>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    #[must_use]
    pub fn with(mut self, step: impl Into<String>) -> Self {
        self.push(step);
        self
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pipe-joined rendering used in tabular output.
    pub fn joined(&self) -> String {
        self.steps.join("|")
    }
}

/// Outcome of running one field processor.
///
/// Constructed only through [`FieldOutcome::valid`] and
/// [`FieldOutcome::invalid`]: `valid` holds exactly when `issue` is `None`,
/// and `kind` is empty whenever the field is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    field: FieldName,
    canonical_value: String,
    kind: String,
    issue: Option<ErrorCode>,
    recommended_action: Option<String>,
    steps: StepTrace,
}

impl FieldOutcome {
    /// # Panics
    ///
    /// Debug builds assert that at least one step was recorded.
    pub fn valid(
        field: FieldName,
        canonical_value: impl Into<String>,
        kind: impl Into<String>,
        steps: StepTrace,
    ) -> Self {
        debug_assert!(!steps.is_empty(), "{field} outcome without steps");
        Self {
            field,
            canonical_value: canonical_value.into(),
            kind: kind.into(),
            issue: None,
            recommended_action: None,
            steps,
        }
    }

    /// # Panics
    ///
    /// Debug builds assert that at least one step was recorded.
    pub fn invalid(
        field: FieldName,
        original: impl Into<String>,
        issue: impl Into<ErrorCode>,
        recommended_action: impl Into<String>,
        steps: StepTrace,
    ) -> Self {
        debug_assert!(!steps.is_empty(), "{field} outcome without steps");
        Self {
            field,
            canonical_value: original.into(),
            kind: String::new(),
            issue: Some(issue.into()),
            recommended_action: Some(recommended_action.into()),
            steps,
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Canonical value when valid, trimmed original input otherwise.
    pub fn canonical_value(&self) -> &str {
        &self.canonical_value
    }

    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    /// Validity rendered the way the tabular output expects it.
    pub fn valid_text(&self) -> &'static str {
        if self.is_valid() { "True" } else { "False" }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn issue(&self) -> Option<ErrorCode> {
        self.issue
    }

    pub fn recommended_action(&self) -> Option<&str> {
        self.recommended_action.as_deref()
    }

    pub fn steps(&self) -> &StepTrace {
        &self.steps
    }
}
