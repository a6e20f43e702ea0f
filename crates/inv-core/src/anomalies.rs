//! Anomaly aggregation.

use inv_model::{AnomalyIssue, AnomalyRecord, FieldName};

use crate::enriched::EnrichedRecord;

/// Builds the anomaly record for one row.
///
/// Fields are visited in [`FieldName::ALL`] order; every field with an issue
/// contributes one `{field, type, value}` entry and its recommended action.
pub fn build_anomaly_record(record: &EnrichedRecord) -> AnomalyRecord {
    let mut issues = Vec::new();
    let mut recommended_actions = Vec::new();
    for field in FieldName::ALL {
        let outcome = record.outcome(field);
        if let Some(code) = outcome.issue() {
            issues.push(AnomalyIssue {
                field: field.as_str().to_string(),
                issue_type: code.as_str().to_string(),
                value: outcome.canonical_value().to_string(),
            });
        }
        if let Some(action) = outcome.recommended_action() {
            recommended_actions.push(action.to_string());
        }
    }
    AnomalyRecord {
        source_row_id: record.row_id().clone(),
        issues,
        recommended_actions,
    }
}

/// One anomaly record per input row, in input order, including rows
/// without issues.
pub fn collect_anomalies(records: &[EnrichedRecord]) -> Vec<AnomalyRecord> {
    records.iter().map(build_anomaly_record).collect()
}
