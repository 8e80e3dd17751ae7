//! Report Exporter Module
//! Serializes the reachability table to CSV.

use crate::engine::ReachabilityTable;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Column names of the exported CSV, in order.
pub const HEADER: [&str; 5] = [
    "Number",
    "Reachable_Days_Count",
    "Probability_decimal",
    "Probability_percent",
    "Reachable_Days",
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One exported line: a target number and its formatted probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub number: u32,
    pub count: usize,
    /// Probability fixed to 5 decimal places.
    pub probability_decimal: String,
    /// Percentage fixed to 2 decimal places with a trailing `%`.
    pub probability_percent: String,
    /// Space-separated ascending sources; empty when none reach the number.
    pub reachable_days: String,
}

impl ReportRow {
    fn fields(&self) -> [String; 5] {
        [
            self.number.to_string(),
            self.count.to_string(),
            self.probability_decimal.clone(),
            self.probability_percent.clone(),
            self.reachable_days.clone(),
        ]
    }
}

/// Tabular report over every target of a table, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn from_table(table: &ReachabilityTable) -> Self {
        let rows = table
            .iter()
            .map(|(number, days)| {
                let count = days.len();
                let probability = table.probability_of(count);
                let reachable_days = days
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");

                ReportRow {
                    number,
                    count,
                    probability_decimal: format!("{:.5}", probability),
                    probability_percent: format!("{:.2}%", probability * 100.0),
                    reachable_days,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Write header and rows as CSV to any writer.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for row in &self.rows {
            wtr.write_record(row.fields())?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Render the complete CSV document in memory.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }

    /// Export to `path`. The document is rendered fully before the file is
    /// touched, so an encoding failure never leaves a truncated file behind.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.to_csv_bytes()?;

        std::fs::write(path, &bytes).map_err(|source| {
            warn!(path = %path.display(), error = %source, "CSV export failed");
            ExportError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            path = %path.display(),
            rows = self.rows.len(),
            "CSV exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_number_in_order() {
        let report = Report::from_table(&ReachabilityTable::default());
        let numbers: Vec<u32> = report.rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=65).collect::<Vec<_>>());
    }

    #[test]
    fn row_formatting() {
        let report = Report::from_table(&ReachabilityTable::default());
        let row = &report.rows()[59];
        assert_eq!(
            row,
            &ReportRow {
                number: 60,
                count: 11,
                probability_decimal: "0.35484".to_string(),
                probability_percent: "35.48%".to_string(),
                reachable_days: "1 2 3 4 5 6 10 12 15 20 30".to_string(),
            }
        );
    }

    #[test]
    fn csv_starts_with_header_line() {
        let report = Report::from_table(&ReachabilityTable::for_month(3));
        let text = String::from_utf8(report.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(
            text,
            "Number,Reachable_Days_Count,Probability_decimal,Probability_percent,Reachable_Days\r\n\
             1,1,0.03226,3.23%,1\r\n\
             2,2,0.06452,6.45%,1 2\r\n\
             3,2,0.06452,6.45%,1 3\r\n"
        );
    }

    #[test]
    fn unreachable_number_has_empty_days_field() {
        let report = Report::from_table(&ReachabilityTable::compute(7, 2..=3));
        let text = String::from_utf8(report.to_csv_bytes().unwrap()).unwrap();
        assert!(text.contains("\r\n7,0,0.00000,0.00%,\r\n"));
    }

    #[test]
    fn empty_table_exports_header_only() {
        let report = Report::from_table(&ReachabilityTable::for_month(0));
        assert!(report.rows().is_empty());
        let text = String::from_utf8(report.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
