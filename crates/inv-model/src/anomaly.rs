//! Per-row anomaly report.

use serde::{Deserialize, Serialize};

use crate::record::RowId;

/// One field-level problem found in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyIssue {
    pub field: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    /// The field's output value (trimmed original input on failure).
    pub value: String,
}

/// Read-only projection of one enriched row's issues and remediations.
///
/// Field order is part of the JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub source_row_id: RowId,
    pub issues: Vec<AnomalyIssue>,
    pub recommended_actions: Vec<String>,
}

impl AnomalyRecord {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}
