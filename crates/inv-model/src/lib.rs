pub mod anomaly;
pub mod codes;
pub mod kinds;
pub mod label;
pub mod options;
pub mod outcome;
pub mod record;

pub use anomaly::{AnomalyIssue, AnomalyRecord};
pub use codes::{DnsError, ErrorCode, ExtractionIssue, Ipv4Error, MacError, SiteError};
pub use kinds::{DnsKind, Ipv4Class, MacKind};
pub use label::{Label, Labeled};
pub use options::{CleaningOptions, FqdnOptions};
pub use outcome::{FieldName, FieldOutcome, StepTrace};
pub use record::{RawRecord, RowId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_outcome_has_no_kind() {
        let steps = StepTrace::new().with("ip_trim").with("ip_invalid_empty_string");
        let outcome = FieldOutcome::invalid(
            FieldName::Ip,
            "",
            Ipv4Error::EmptyString,
            "Correct IP or mark record for revision",
            steps,
        );
        assert!(!outcome.is_valid());
        assert_eq!(outcome.valid_text(), "False");
        assert_eq!(outcome.kind(), "");
        assert_eq!(outcome.issue().map(|c| c.as_str()), Some("empty_string"));
        assert_eq!(outcome.steps().joined(), "ip_trim|ip_invalid_empty_string");
    }

    #[test]
    fn valid_outcome_has_no_issue_or_action() {
        let outcome = FieldOutcome::valid(
            FieldName::Mac,
            "aa:bb:cc:dd:ee:ff",
            MacKind::Eui48.as_str(),
            StepTrace::new().with("mac_trim"),
        );
        assert!(outcome.is_valid());
        assert_eq!(outcome.valid_text(), "True");
        assert!(outcome.issue().is_none());
        assert!(outcome.recommended_action().is_none());
    }

    #[test]
    fn anomaly_record_serializes_in_contract_order() {
        let record = AnomalyRecord {
            source_row_id: RowId::Index(3),
            issues: vec![AnomalyIssue {
                field: "mac".to_string(),
                issue_type: MacError::MixedSeparators.to_string(),
                value: "aa:bb-cc:dd:ee:ff".to_string(),
            }],
            recommended_actions: vec!["Correct MAC or mark record for revision".to_string()],
        };
        let json = serde_json::to_string(&record).expect("serialize anomaly");
        assert_eq!(
            json,
            r#"{"source_row_id":3,"issues":[{"field":"mac","type":"mixed_separators","value":"aa:bb-cc:dd:ee:ff"}],"recommended_actions":["Correct MAC or mark record for revision"]}"#
        );
    }
}
