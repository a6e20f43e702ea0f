//! Inventory ingestion: CSV files to [`RawRecord`](inv_model::RawRecord)s.

pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, ROW_ID_COLUMN, read_csv_from, read_csv_table};
pub use error::{IngestError, Result};
