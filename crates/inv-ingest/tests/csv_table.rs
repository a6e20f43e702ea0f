use std::fs;
use std::path::PathBuf;

use inv_ingest::{IngestError, read_csv_table};
use inv_model::RowId;
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_inventory_into_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(
        &dir,
        "inventory_raw.csv",
        "ip,mac,site,hostname,fqdn,owner,device_type,notes\n\
         192.168.1.10,AA-BB-CC-DD-EE-FF,HQ_Bldg 2,core-sw1,core-sw1.corp.example,\"Lima, Ana\",switch,\n\
         \n\
         10.0.0.300,,,bad_host\n",
    );
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers.len(), 8);
    assert_eq!(table.rows.len(), 2);

    let records = table.records();
    assert_eq!(records[0].row_id(), &RowId::Index(0));
    assert_eq!(records[0].get("owner"), Some("Lima, Ana"));
    assert_eq!(records[0].get("notes"), Some(""));
    assert_eq!(records[1].row_id(), &RowId::Index(1));
    assert_eq!(records[1].get("hostname"), Some("bad_host"));
    assert_eq!(records[1].get("device_type"), Some(""));
    assert_eq!(records[1].get("serial"), None);
}

#[test]
fn header_matching_is_case_insensitive() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "upper.csv", "IP,Site\n10.0.0.1,lab\n");
    let records = read_csv_table(&path).expect("read csv").records();
    assert_eq!(records[0].get("ip"), Some("10.0.0.1"));
    assert_eq!(records[0].get("site"), Some("lab"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "header.csv", "ip,mac\n");
    let table = read_csv_table(&path).expect("read csv");
    assert!(table.rows.is_empty());
    assert!(table.records().is_empty());
}
