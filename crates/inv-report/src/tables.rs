//! Tabular outputs built as polars frames and written as CSV.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use inv_core::EnrichedRecord;
use polars::prelude::*;
use tracing::warn;

/// Columns of the clean table, in output order.
pub const CLEAN_COLUMNS: [&str; 24] = [
    "source_row_id",
    "notes",
    "ip",
    "ip_valid",
    "ip_version",
    "ip_reverse_ptr",
    "ip_classification",
    "subnet_cidr",
    "mac",
    "mac_valid",
    "mac_kind",
    "site",
    "hostname",
    "hostname_valid",
    "hostname_kind",
    "fqdn",
    "fqdn_valid",
    "fqdn_kind",
    "owner",
    "owner_email",
    "owner_team",
    "device",
    "device_type_confidence",
    "normalization_steps",
];

fn clean_row(record: &EnrichedRecord) -> [String; 24] {
    let ip = &record.ip;
    [
        record.row_id().to_string(),
        record.raw.get("notes").unwrap_or_default().to_string(),
        ip.outcome.canonical_value().to_string(),
        ip.outcome.valid_text().to_string(),
        ip.version.clone(),
        ip.reverse_ptr.clone(),
        ip.outcome.kind().to_string(),
        ip.subnet.clone(),
        record.mac.canonical_value().to_string(),
        record.mac.valid_text().to_string(),
        record.mac.kind().to_string(),
        record.site.canonical_value().to_string(),
        record.hostname.canonical_value().to_string(),
        record.hostname.valid_text().to_string(),
        record.hostname.kind().to_string(),
        record.fqdn.canonical_value().to_string(),
        record.fqdn.valid_text().to_string(),
        record.fqdn.kind().to_string(),
        record.owner.outcome.canonical_value().to_string(),
        record.owner.email.clone(),
        record.owner.team.clone(),
        record.device.outcome.canonical_value().to_string(),
        record.device.type_confidence.clone(),
        record.normalization_steps(),
    ]
}

/// One row per record with the canonical values, validity flags and kinds.
pub fn clean_table_frame(records: &[EnrichedRecord]) -> Result<DataFrame> {
    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); CLEAN_COLUMNS.len()];
    for record in records {
        for (column, value) in values.iter_mut().zip(clean_row(record)) {
            column.push(value);
        }
    }
    let columns = CLEAN_COLUMNS
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new((*name).into(), column).into_column())
        .collect();
    DataFrame::new(columns).context("build clean table")
}

/// Raw input columns followed by every flattened attribute.
///
/// A raw column whose name collides with an earlier column is dropped.
pub fn enriched_table_frame(headers: &[String], records: &[EnrichedRecord]) -> Result<DataFrame> {
    let attribute_names: Vec<String> = match records.first() {
        Some(record) => record.attributes().into_iter().map(|(key, _)| key).collect(),
        None => Vec::new(),
    };

    let mut names: Vec<String> = Vec::new();
    for header in headers {
        if names.contains(header) || attribute_names.contains(header) {
            warn!(column = %header, "duplicate column dropped from enriched table");
            continue;
        }
        names.push(header.clone());
    }
    let raw_count = names.len();
    names.extend(attribute_names);

    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); names.len()];
    for record in records {
        let raw = names[..raw_count]
            .iter()
            .map(|name| record.raw.get(name).unwrap_or_default().to_string());
        let attributes = record.attributes().into_iter().map(|(_, value)| value);
        for (column, value) in values.iter_mut().zip(raw.chain(attributes)) {
            column.push(value);
        }
    }
    let columns = names
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into_column())
        .collect();
    DataFrame::new(columns).context("build enriched table")
}

/// Writes a frame as CSV with a header row, creating parent directories.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let mut file =
        File::create(path).with_context(|| format!("create csv: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write csv: {}", path.display()))?;
    Ok(())
}

pub fn write_clean_table(path: &Path, records: &[EnrichedRecord]) -> Result<()> {
    let mut df = clean_table_frame(records)?;
    write_csv(&mut df, path)
}

pub fn write_enriched_table(
    path: &Path,
    headers: &[String],
    records: &[EnrichedRecord],
) -> Result<()> {
    let mut df = enriched_table_frame(headers, records)?;
    write_csv(&mut df, path)
}
