//! Generic tabular results.
//!
//! Typed row structs cover the entity accessors; reports and filtered
//! searches return whatever columns their SQL selects, so those come back as
//! a `Table`: ordered column names plus rows of raw SQLite values. Every
//! table the caller displays must be exportable as UTF-8 CSV with a header
//! row matching the displayed column names.

use rusqlite::types::Value;

/// An ordered set of named columns and the rows beneath them.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// True when the read succeeded but matched nothing. Callers render an
    /// explicit "no data" indication for this case, never an empty grid.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column name), rendered as display text.
    pub fn cell(&self, row: usize, column: &str) -> Option<String> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx)).map(render)
    }

    /// Export as CSV: header row of column names, then one line per row,
    /// UTF-8 throughout.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(render))?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        // The writer only ever receives UTF-8 strings.
        Ok(String::from_utf8(bytes).expect("csv writer output is UTF-8"))
    }
}

/// Display text for a single SQLite value. NULL renders as the empty string.
/// Blobs do not occur in this schema and render empty as well.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            columns: vec!["Name".to_string(), "Quantity".to_string()],
            rows: vec![
                vec![Value::Text("Rice, white".to_string()), Value::Integer(50)],
                vec![Value::Text("Bread".to_string()), Value::Null],
            ],
        }
    }

    #[test]
    fn test_csv_has_header_and_quotes_commas() {
        let csv = sample().to_csv().expect("csv export");
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Quantity"));
        assert_eq!(lines.next(), Some("\"Rice, white\",50"));
        assert_eq!(lines.next(), Some("Bread,"));
    }

    #[test]
    fn test_cell_lookup_by_column_name() {
        let table = sample();
        assert_eq!(table.cell(0, "Quantity").as_deref(), Some("50"));
        assert_eq!(table.cell(1, "Quantity").as_deref(), Some(""));
        assert_eq!(table.cell(0, "Missing"), None);
    }

    #[test]
    fn test_empty_table_is_distinguishable() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
