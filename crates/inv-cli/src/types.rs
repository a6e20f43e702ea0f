use std::path::PathBuf;

use inv_model::FieldName;

/// Everything the summary printer needs after a `clean` run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub records: usize,
    pub rows_with_issues: usize,
    pub extractor: String,
    pub fields: Vec<FieldSummary>,
    pub issues: Vec<IssueCount>,
    pub outputs: OutputPaths,
}

impl CleanResult {
    pub fn has_anomalies(&self) -> bool {
        self.rows_with_issues > 0
    }
}

/// Valid/invalid counts for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub field: FieldName,
    pub valid: usize,
    pub invalid: usize,
}

/// Number of records carrying one issue code on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCount {
    pub field: FieldName,
    pub code: String,
    pub count: usize,
}

/// Files written by a run; `None` when skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub clean: Option<PathBuf>,
    pub enriched: Option<PathBuf>,
    pub anomalies: Option<PathBuf>,
}
