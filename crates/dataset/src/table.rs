use std::collections::BTreeMap;

use crate::error::{DatasetError, DatasetResult, RowShapeError};

pub type Row = BTreeMap<String, String>;

/// Header-keyed rows of a CSV reference table.
#[derive(Debug, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub skipped: Vec<RowShapeError>,
}

impl CsvTable {
    /// Parse `text` as CSV with a mandatory header row.
    ///
    /// Rows with a different field count than the header are skipped and
    /// reported in `skipped`; any other CSV failure aborts the whole table.
    pub fn parse(table: &'static str, text: &str) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| DatasetError::Csv { table, source })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(DatasetError::MissingHeader { table });
        }

        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|source| DatasetError::Csv { table, source })?;

            if record.len() != headers.len() {
                let error = RowShapeError {
                    table,
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                };
                tracing::warn!(%error, "Skipping malformed reference row");
                skipped.push(error);
                continue;
            }

            rows.push(
                headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(str::to_string))
                    .collect(),
            );
        }

        Ok(Self {
            headers,
            rows,
            skipped,
        })
    }

    pub fn require_column(&self, column: &'static str, table: &'static str) -> DatasetResult<()> {
        if self.headers.iter().any(|h| h == column) {
            Ok(())
        } else {
            Err(DatasetError::MissingColumn { table, column })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_keyed_by_header() {
        let table = CsvTable::parse("t.csv", "keyword,maps_to\nTahini , sesame\nbrie,milk_protein\n")
            .unwrap();

        assert_eq!(table.headers, vec!["keyword", "maps_to"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["keyword"], "Tahini");
        assert_eq!(table.rows[0]["maps_to"], "sesame");
        assert!(table.skipped.is_empty());
    }

    #[test]
    fn test_short_and_long_rows_are_skipped() {
        let table = CsvTable::parse(
            "t.csv",
            "keyword,maps_to\ntahini,sesame\nbroken\nwalnut,tree_nut,extra\negg,egg\n",
        )
        .unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.skipped.len(), 2);
        assert_eq!(table.skipped[0].expected, 2);
        assert_eq!(table.skipped[0].found, 1);
        assert_eq!(table.skipped[0].line, 3);
        assert_eq!(table.skipped[1].found, 3);
    }

    #[test]
    fn test_empty_text_has_no_header() {
        let err = CsvTable::parse("t.csv", "").unwrap_err();
        assert!(matches!(err, DatasetError::MissingHeader { table: "t.csv" }));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let table = CsvTable::parse("t.csv", "keyword,maps_to\n\"nuts, mixed\",tree_nut\n").unwrap();
        assert_eq!(table.rows[0]["keyword"], "nuts, mixed");
    }

    #[test]
    fn test_require_column() {
        let table = CsvTable::parse("t.csv", "keyword\nsesame\n").unwrap();
        assert!(table.require_column("keyword", "t.csv").is_ok());
        assert!(matches!(
            table.require_column("maps_to", "t.csv"),
            Err(DatasetError::MissingColumn {
                column: "maps_to",
                ..
            })
        ));
    }
}
