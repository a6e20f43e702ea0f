//! Output writers for cleaned inventories.

pub mod anomalies;
pub mod tables;

pub use anomalies::write_anomalies_json;
pub use tables::{
    CLEAN_COLUMNS, clean_table_frame, enriched_table_frame, write_clean_table, write_csv,
    write_enriched_table,
};

pub const CLEAN_FILE_NAME: &str = "inventory_clean.csv";
pub const ENRICHED_FILE_NAME: &str = "inventory_enriched.csv";
pub const ANOMALIES_FILE_NAME: &str = "anomalies.json";
