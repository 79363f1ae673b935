//! Output format writers.
//!
//! - [`write_rows_csv`] / [`to_rows_csv`] - cleaned row table, semicolon delimited (`csv-output`)
//! - [`write_report_json`] / [`to_report_json`] - the full [`ChatReport`](crate::report::ChatReport) as pretty JSON (`json-output`)
//! - [`write_rows_jsonl`] / [`to_rows_jsonl`] - one row per line (`json-output`)
//!
//! | Format | Content | Use Case |
//! |--------|---------|----------|
//! | CSV | Row table | Spreadsheets, pandas |
//! | JSON | Report | Dashboards, charts |
//! | JSONL | Row table | Line-oriented tooling |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::output::{to_rows_csv, write_report_json, write_rows_jsonl};
//! use chatstat::report::Analyzer;
//!
//! let analysis = Analyzer::new(AnalysisConfig::new()).analyze_path("chat.txt".as_ref())?;
//!
//! write_report_json(&analysis.report, "report.json")?;
//! write_rows_jsonl(&analysis.rows, "rows.jsonl")?;
//! let csv = to_rows_csv(&analysis.rows)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_rows_csv, write_rows_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_report_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_rows_jsonl, write_rows_jsonl};
