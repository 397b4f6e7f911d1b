//! Decoder for the Census API's two-dimensional responses.
//!
//! Every Census endpoint answers with a JSON array of arrays shaped like a
//! CSV file: the first row names the columns and each following row is a
//! record.
//!
//! ```text
//! [["NAME", "NATION"], ["United States", "1"]]
//! ```
//!
//! [`Table::from_json`] validates that shape once; after that,
//! [`Table::into_records`] and [`Table::into_variable_records`] cannot fail.

use serde_json::Value;

use crate::error::{CensusError, Result};
use crate::types::{Record, RecordList};

/// Pseudo-variables listed by the `/variables` endpoint that cannot be
/// requested through `get=`. Rows naming them are dropped from variable listings.
pub const RESERVED_VARIABLE_NAMES: [&str; 3] = ["for", "in", "ucgid"];

/// A validated header row plus data rows of the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// - [`CensusError::Json`] if the body is not an array of arrays
    /// - [`CensusError::MissingHeaderRow`] if the outer array is empty
    /// - [`CensusError::InvalidHeader`] if a header cell is not a string
    /// - [`CensusError::RowLength`] if a data row is wider or narrower than the header
    ///
    /// # Examples
    ///
    /// ```
    /// use census_core::Table;
    ///
    /// let table = Table::from_json(r#"[["NAME","NATION"],["United States","1"]]"#).unwrap();
    /// assert_eq!(table.header(), ["NAME", "NATION"]);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn from_json(body: &str) -> Result<Self> {
        let rows: Vec<Vec<Value>> = serde_json::from_str(body)?;
        Self::from_rows(rows)
    }

    /// Builds a table from already-parsed rows, the first being the header.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut rows = rows.into_iter();
        let header = rows
            .next()
            .ok_or(CensusError::MissingHeaderRow)?
            .into_iter()
            .enumerate()
            .map(|(column, cell)| match cell {
                Value::String(name) => Ok(name),
                other => Err(CensusError::InvalidHeader {
                    column,
                    value: other.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        let rows: Vec<Vec<Value>> = rows.collect();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(CensusError::RowLength {
                    row: index + 1,
                    expected: header.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { header, rows })
    }

    /// Column names, in upstream order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts every data row into a record keyed by the header row.
    pub fn into_records(self) -> RecordList {
        let Self { header, rows } = self;
        rows.into_iter().map(|row| zip_row(&header, row)).collect()
    }

    /// Like [`into_records`](Self::into_records), but skips rows whose first
    /// cell names one of the [`RESERVED_VARIABLE_NAMES`].
    pub fn into_variable_records(self) -> RecordList {
        let Self { header, rows } = self;
        rows.into_iter()
            .filter(|row| !is_reserved(row.first()))
            .map(|row| zip_row(&header, row))
            .collect()
    }
}

fn zip_row(header: &[String], row: Vec<Value>) -> Record {
    header.iter().cloned().zip(row).collect()
}

fn is_reserved(first: Option<&Value>) -> bool {
    matches!(first, Some(Value::String(name)) if RESERVED_VARIABLE_NAMES.contains(&name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variables_body() -> &'static str {
        r#"[
            ["name", "label", "concept"],
            ["for", "Census API FIPS 'for' clause", "Census API Geography Specification"],
            ["NAME", "Geographic Area Name", ""],
            ["in", "Census API FIPS 'in' clause", "Census API Geography Specification"],
            ["ucgid", "Uniform Census Geography Identifier clause", "Census API Geography Specification"],
            ["NATION", "Nation", ""]
        ]"#
    }

    #[test]
    fn test_records_map_header_to_position() {
        let table = Table::from_json(r#"[["NAME","NATION"],["United States","1"]]"#).unwrap();
        let records = table.into_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["NAME"], "United States");
        assert_eq!(records[0]["NATION"], "1");
    }

    #[test]
    fn test_every_record_has_header_keys_in_order() {
        let table = Table::from_json(
            r#"[["B","A","C"],["1","2","3"],["4","5","6"],["7","8","9"]]"#,
        )
        .unwrap();
        let records = table.into_records();

        assert_eq!(records.len(), 3);
        for record in &records {
            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            assert_eq!(keys, ["B", "A", "C"]);
        }
        assert_eq!(records[2]["A"], "8");
    }

    #[test]
    fn test_variable_records_drop_reserved_names() {
        let records = Table::from_json(variables_body())
            .unwrap()
            .into_variable_records();

        let names: Vec<&str> = records
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["NAME", "NATION"]);
    }

    #[test]
    fn test_dataset_records_keep_reserved_names() {
        let records = Table::from_json(variables_body()).unwrap().into_records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["name"], "for");
    }

    #[test]
    fn test_reserved_filter_is_case_sensitive() {
        let table = Table::from_json(r#"[["name"],["FOR"],["In"]]"#).unwrap();
        assert_eq!(table.into_variable_records().len(), 2);
    }

    #[test]
    fn test_header_only_table_decodes_to_empty_list() {
        let table = Table::from_json(r#"[["NAME","NATION"]]"#).unwrap();
        assert!(table.is_empty());
        assert!(table.into_records().is_empty());
    }

    #[test]
    fn test_null_cells_pass_through() {
        let table = Table::from_rows(vec![
            vec![json!("NAME"), json!("EMP")],
            vec![json!("United States"), Value::Null],
        ])
        .unwrap();

        let records = table.into_records();
        assert!(records[0]["EMP"].is_null());
    }

    #[test]
    fn test_empty_outer_array_is_missing_header() {
        let error = Table::from_json("[]").unwrap_err();
        assert!(matches!(error, CensusError::MissingHeaderRow));
    }

    #[test]
    fn test_non_string_header_rejected() {
        let error = Table::from_json(r#"[["NAME", 7]]"#).unwrap_err();
        assert!(matches!(error, CensusError::InvalidHeader { column: 1, .. }));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let error = Table::from_json(r#"[["NAME","NATION"],["United States"]]"#).unwrap_err();
        assert!(matches!(
            error,
            CensusError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_html_body_is_syntax_error() {
        let error = Table::from_json("<html>error: unknown variable 'FOO'</html>").unwrap_err();
        assert!(error.is_syntax_error());
    }
}
