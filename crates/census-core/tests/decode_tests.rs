//! Decoder behaviour over realistic Census payloads.

use census_core::{RESERVED_VARIABLE_NAMES, Table};
use serde_json::{Value, json};

fn table_with_rows(header: &[&str], rows: &[Vec<&str>]) -> Table {
    let mut raw = vec![header.iter().map(|h| json!(h)).collect::<Vec<Value>>()];
    raw.extend(
        rows.iter()
            .map(|row| row.iter().map(|cell| json!(cell)).collect::<Vec<Value>>()),
    );
    Table::from_rows(raw).unwrap()
}

#[test]
fn dataset_payload_yields_one_record_per_row() {
    let rows: Vec<Vec<&str>> = (0..25).map(|_| vec!["United States", "1", "00"]).collect();
    let table = table_with_rows(&["NAME", "NATION", "us"], &rows);

    let records = table.into_records();

    assert_eq!(records.len(), 25);
    assert!(records.iter().all(|r| r.len() == 3));
}

#[test]
fn reserved_rows_never_appear_in_variable_listings() {
    let mut rows = vec![vec!["NAME", "Geographic Area Name"]];
    for reserved in RESERVED_VARIABLE_NAMES {
        rows.push(vec![reserved, "pseudo column"]);
    }
    rows.push(vec!["OWNPDEMP", "Number of owners"]);
    let table = table_with_rows(&["name", "label"], &rows);

    let records = table.into_variable_records();

    assert_eq!(records.len(), 2);
    for record in &records {
        let name = record["name"].as_str().unwrap();
        assert!(!RESERVED_VARIABLE_NAMES.contains(&name));
    }
}

#[test]
fn reserved_names_outside_first_column_are_kept() {
    let table = table_with_rows(&["name", "label"], &[vec!["NAME", "for"]]);
    assert_eq!(table.into_variable_records().len(), 1);
}

#[test]
fn decoded_records_serialize_in_header_order() {
    let table = Table::from_json(r#"[["NATION","NAME"],["1","United States"]]"#).unwrap();
    let json = serde_json::to_string(&table.into_records()).unwrap();

    assert_eq!(json, r#"[{"NATION":"1","NAME":"United States"}]"#);
}
