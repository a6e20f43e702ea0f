use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use inv_model::{RawRecord, RowId};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Optional column carrying an explicit row identifier.
pub const ROW_ID_COLUMN: &str = "source_row_id";

/// A header row and its data rows, every row padded to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `expected` that no header matches.
    pub fn missing_columns<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Converts the rows into records.
    ///
    /// The row id is the `source_row_id` cell when that column exists and the
    /// cell is not blank, otherwise the 0-based data row position.
    pub fn records(&self) -> Vec<RawRecord> {
        let id_column = self.column_index(ROW_ID_COLUMN);
        self.rows
            .iter()
            .enumerate()
            .map(|(position, row)| {
                let row_id = id_column
                    .and_then(|idx| row.get(idx))
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .map_or(RowId::Index(position), RowId::from);
                let values = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                RawRecord::new(row_id, values)
            })
            .collect()
    }
}

/// Reads an inventory CSV file. The first non-blank line is the header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_csv_from(file, path)
}

/// Reads CSV text from any reader; `source` names it in errors.
pub fn read_csv_from<R: Read>(reader: R, source: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut truncated = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source_err| IngestError::CsvParse {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let Some(width) = headers.as_ref().map(Vec::len) else {
            headers = Some(row.iter().map(|value| normalize_header(value)).collect());
            continue;
        };
        if row.len() > width {
            truncated += 1;
        }
        let mut padded = Vec::with_capacity(width);
        for idx in 0..width {
            padded.push(row.get(idx).cloned().unwrap_or_default());
        }
        rows.push(padded);
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    };
    if truncated > 0 {
        warn!(
            path = %source.display(),
            rows = truncated,
            "rows wider than the header were truncated"
        );
    }
    debug!(
        path = %source.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv table loaded"
    );
    Ok(CsvTable { headers, rows })
}
