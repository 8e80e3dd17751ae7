//! Report module - CSV export and derived insights

mod exporter;
mod insights;

pub use exporter::{ExportError, Report, ReportRow, HEADER};
pub use insights::{Extreme, Insights};
