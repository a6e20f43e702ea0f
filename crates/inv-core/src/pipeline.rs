//! Record-level cleaning.

use inv_model::{FieldName, RawRecord};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::context::CleaningContext;
use crate::enriched::EnrichedRecord;
use crate::processors::{
    process_device, process_fqdn, process_hostname, process_ipv4, process_mac, process_owner,
    process_site,
};

/// Input columns the processors read.
pub const INPUT_COLUMNS: [&str; 8] = [
    "ip",
    "mac",
    "site",
    "hostname",
    "fqdn",
    "owner",
    "device_type",
    "notes",
];

fn source_column(field: FieldName) -> &'static str {
    match field {
        FieldName::Device => "device_type",
        other => other.as_str(),
    }
}

/// Runs every field processor over one record, in processing order.
pub fn clean_record(record: &RawRecord, context: &CleaningContext<'_>) -> EnrichedRecord {
    let options = context.options;
    let ip = process_ipv4(record.get("ip"));
    let mac = process_mac(record.get("mac"));
    let site = process_site(record.get("site"));
    let hostname = process_hostname(record.get("hostname"), options.hostname_allow_underscore);
    let fqdn = process_fqdn(record.get("fqdn"), options.fqdn);
    let owner = process_owner(record.get("owner"), context.extractor, context.prompts);
    let device = process_device(
        record.get("device_type"),
        record.get("hostname"),
        record.get("notes"),
        context.extractor,
        context.prompts,
    );

    let enriched = EnrichedRecord {
        raw: record.clone(),
        ip,
        mac,
        site,
        hostname,
        fqdn,
        owner,
        device,
    };

    if context.log_data {
        for outcome in enriched.outcomes() {
            trace!(
                row = %enriched.row_id(),
                field = %outcome.field(),
                raw = record.get(source_column(outcome.field())).unwrap_or_default(),
                value = outcome.canonical_value(),
                valid = outcome.is_valid(),
                "field cleaned"
            );
        }
    }
    debug!(
        row = %enriched.row_id(),
        issues = enriched.outcomes().filter(|outcome| !outcome.is_valid()).count(),
        "record cleaned"
    );
    enriched
}

/// Cleans every record on the rayon pool. Output order matches input order.
pub fn clean_records(records: &[RawRecord], context: &CleaningContext<'_>) -> Vec<EnrichedRecord> {
    records
        .par_iter()
        .map(|record| clean_record(record, context))
        .collect()
}
