//! Inventory record cleaning.
//!
//! [`clean_records`] runs the field processors over every raw record and
//! returns [`EnrichedRecord`]s; [`collect_anomalies`] reduces those to the
//! per-row anomaly report. Records are independent of each other, so the
//! work is spread over the rayon pool.

pub mod anomalies;
pub mod context;
pub mod enriched;
pub mod pipeline;
pub mod processors;
pub mod prompts;

pub use anomalies::{build_anomaly_record, collect_anomalies};
pub use context::CleaningContext;
pub use enriched::{DeviceResult, EnrichedRecord, IpResult, OwnerResult};
pub use pipeline::{INPUT_COLUMNS, clean_record, clean_records};
pub use processors::{
    process_device, process_fqdn, process_hostname, process_ipv4, process_mac, process_owner,
    process_site,
};
pub use prompts::Prompts;
