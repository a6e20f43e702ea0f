use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use inv_core::{CleaningContext, Prompts, collect_anomalies};
use inv_model::{
    CleaningOptions, DnsError, ExtractionIssue, FieldName, FqdnOptions, Ipv4Error, MacError,
    SiteError,
};

use inv_cli::logging::log_data_enabled;
use inv_cli::pipeline::{
    ExtractionSettings, IngestResult, OutputConfig, build_extractor, clean, ingest, output,
    summarize, trace_anomalies,
};
use inv_cli::types::CleanResult;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_codes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Code"]);
    apply_table_style(&mut table);
    let rows = Ipv4Error::ALL
        .iter()
        .map(|code| (FieldName::Ip, code.as_str()))
        .chain(MacError::ALL.iter().map(|code| (FieldName::Mac, code.as_str())))
        .chain(SiteError::ALL.iter().map(|code| (FieldName::Site, code.as_str())))
        .chain(
            DnsError::ALL
                .iter()
                .map(|code| (FieldName::Hostname, code.as_str())),
        )
        .chain(DnsError::ALL.iter().map(|code| (FieldName::Fqdn, code.as_str())))
        .chain([
            (
                FieldName::Owner,
                ExtractionIssue::MissingOwnerFields.as_str(),
            ),
            (
                FieldName::Device,
                ExtractionIssue::MissingDeviceFields.as_str(),
            ),
        ]);
    for (field, code) in rows {
        table.add_row(vec![field.as_str(), code]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let input = &args.input;
    let run_span = info_span!("clean", input = %input.display());
    let _run_guard = run_span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(input));

    // Stage 1: ingest
    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let IngestResult {
        headers,
        records,
        missing_columns,
    } = ingest_span.in_scope(|| ingest(input))?;
    info!(
        records = records.len(),
        columns = headers.len(),
        missing_columns = missing_columns.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: clean
    let extractor = build_extractor(&ExtractionSettings {
        enabled: !args.no_extract,
        base_url: args.api_base.clone(),
        model: args.model.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        max_retries: args.max_retries,
    })?;
    let prompts = Prompts::default();
    let context = CleaningContext::new(extractor.as_ref(), &prompts)
        .with_options(cleaning_options(args))
        .with_log_data(log_data_enabled());
    let clean_span = info_span!("clean_records", extractor = extractor.name());
    let clean_start = Instant::now();
    let (cleaned, anomalies) = clean_span.in_scope(|| -> Result<_> {
        let cleaned = clean(&records, &context, args.jobs)?;
        let anomalies = collect_anomalies(&cleaned);
        trace_anomalies(&anomalies);
        Ok((cleaned, anomalies))
    })?;
    let rows_with_issues = anomalies.iter().filter(|anomaly| anomaly.has_issues()).count();
    info!(
        records = cleaned.len(),
        rows_with_issues,
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    // Stage 3: output
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_start = Instant::now();
    let outputs = output_span.in_scope(|| {
        output(
            &OutputConfig {
                output_dir: output_dir.clone(),
                write_enriched: args.enriched,
                dry_run: args.dry_run,
            },
            &headers,
            &cleaned,
            &anomalies,
        )
    })?;
    info!(
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    let (fields, issues) = summarize(&cleaned);
    Ok(CleanResult {
        input: input.clone(),
        output_dir,
        records: cleaned.len(),
        rows_with_issues,
        extractor: extractor.name().to_string(),
        fields,
        issues,
        outputs,
    })
}

fn cleaning_options(args: &CleanArgs) -> CleaningOptions {
    let fqdn = if args.strict_fqdn {
        FqdnOptions::strict()
    } else {
        FqdnOptions::default()
    }
    .with_allow_underscore(args.fqdn_allow_underscore);
    CleaningOptions::new()
        .with_hostname_allow_underscore(args.hostname_allow_underscore)
        .with_fqdn(fqdn)
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
