//! Stage functions for the `clean` command: ingest, clean, summarize, output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use inv_core::{CleaningContext, EnrichedRecord, INPUT_COLUMNS, clean_records};
use inv_extract::{ChatExtractor, DisabledExtractor, Extractor, ExtractorConfig};
use inv_ingest::read_csv_table;
use inv_model::{AnomalyRecord, FieldName, RawRecord};
use inv_report::{
    ANOMALIES_FILE_NAME, CLEAN_FILE_NAME, ENRICHED_FILE_NAME, write_anomalies_json,
    write_clean_table, write_enriched_table,
};
use tracing::{info, trace, warn};

use crate::logging::redact_value;
use crate::types::{FieldSummary, IssueCount, OutputPaths};

/// Loaded input: header names and one record per data row.
#[derive(Debug)]
pub struct IngestResult {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
    pub missing_columns: Vec<&'static str>,
}

pub fn ingest(path: &Path) -> Result<IngestResult> {
    let table = read_csv_table(path).with_context(|| format!("ingest {}", path.display()))?;
    let missing_columns = table.missing_columns(&INPUT_COLUMNS);
    for column in &missing_columns {
        warn!(column, "input column missing; its values are treated as absent");
    }
    let records = table.records();
    Ok(IngestResult {
        headers: table.headers,
        records,
        missing_columns,
    })
}

/// Extraction settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

/// Picks the extractor for a run.
///
/// Extraction that is disabled, or has no API key in the environment, falls
/// back to [`DisabledExtractor`].
pub fn build_extractor(settings: &ExtractionSettings) -> Result<Box<dyn Extractor>> {
    if !settings.enabled {
        info!("extraction disabled");
        return Ok(Box::new(DisabledExtractor));
    }
    let config = ExtractorConfig::from_env()
        .with_base_url(settings.base_url.clone())
        .with_model(settings.model.clone())
        .with_timeout(settings.timeout)
        .with_max_retries(settings.max_retries);
    if !config.has_api_key() {
        warn!(
            env = inv_extract::config::API_KEY_ENV,
            "no API key set; owner and device fields will be reported as missing"
        );
        return Ok(Box::new(DisabledExtractor));
    }
    let extractor = ChatExtractor::new(config).context("build extraction client")?;
    Ok(Box::new(extractor))
}

/// Cleans every record, on a dedicated pool when `jobs` is set.
pub fn clean(
    records: &[RawRecord],
    context: &CleaningContext<'_>,
    jobs: Option<usize>,
) -> Result<Vec<EnrichedRecord>> {
    match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("build worker pool")?;
            Ok(pool.install(|| clean_records(records, context)))
        }
        None => Ok(clean_records(records, context)),
    }
}

/// Per-field valid/invalid counts in processing order, plus issue counts
/// sorted by descending frequency.
pub fn summarize(records: &[EnrichedRecord]) -> (Vec<FieldSummary>, Vec<IssueCount>) {
    let mut fields: Vec<FieldSummary> = FieldName::ALL
        .iter()
        .map(|field| FieldSummary {
            field: *field,
            valid: 0,
            invalid: 0,
        })
        .collect();
    let mut issues: BTreeMap<(FieldName, &'static str), usize> = BTreeMap::new();
    for record in records {
        for (summary, field) in fields.iter_mut().zip(FieldName::ALL) {
            let outcome = record.outcome(field);
            match outcome.issue() {
                None => summary.valid += 1,
                Some(code) => {
                    summary.invalid += 1;
                    *issues.entry((field, code.as_str())).or_default() += 1;
                }
            }
        }
    }
    let mut issues: Vec<IssueCount> = issues
        .into_iter()
        .map(|((field, code), count)| IssueCount {
            field,
            code: code.to_string(),
            count,
        })
        .collect();
    issues.sort_by(|a, b| b.count.cmp(&a.count).then(a.field.cmp(&b.field)));
    (fields, issues)
}

/// Logs every anomaly at trace level with values redacted unless
/// `--log-data` is set.
pub fn trace_anomalies(anomalies: &[AnomalyRecord]) {
    for anomaly in anomalies {
        for issue in &anomaly.issues {
            trace!(
                row = %anomaly.source_row_id,
                field = %issue.field,
                issue = %issue.issue_type,
                value = redact_value(&issue.value),
                "anomaly"
            );
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub write_enriched: bool,
    pub dry_run: bool,
}

pub fn output(
    config: &OutputConfig,
    headers: &[String],
    records: &[EnrichedRecord],
    anomalies: &[AnomalyRecord],
) -> Result<OutputPaths> {
    if config.dry_run {
        info!("dry run; no files written");
        return Ok(OutputPaths::default());
    }
    let mut paths = OutputPaths::default();

    let clean_path = config.output_dir.join(CLEAN_FILE_NAME);
    write_clean_table(&clean_path, records)?;
    paths.clean = Some(clean_path);

    if config.write_enriched {
        let enriched_path = config.output_dir.join(ENRICHED_FILE_NAME);
        write_enriched_table(&enriched_path, headers, records)?;
        paths.enriched = Some(enriched_path);
    }

    let anomalies_path = config.output_dir.join(ANOMALIES_FILE_NAME);
    write_anomalies_json(&anomalies_path, anomalies)?;
    paths.anomalies = Some(anomalies_path);

    Ok(paths)
}
