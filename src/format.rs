//! Output format types for the chatstat library.
//!
//! These types do not depend on the CLI framework and can be used from any
//! library caller.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::config::AnalysisConfig;
//! use chatstat::format::{OutputFormat, write_to_format};
//! use chatstat::report::Analyzer;
//!
//! let analysis = Analyzer::new(AnalysisConfig::new()).analyze_path("chat.txt".as_ref())?;
//!
//! // Detect the format from the extension
//! let format = OutputFormat::from_path("stats.json")?;
//! write_to_format(&analysis, "stats.json", format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatStatError;
use crate::report::Analysis;

/// Output format of an analysis.
///
/// - [`Json`](OutputFormat::Json) - the full report (default)
/// - [`Csv`](OutputFormat::Csv) - the cleaned row table
/// - [`Jsonl`](OutputFormat::Jsonl) - the cleaned row table, one row per line
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty JSON report with every aggregate.
    #[default]
    Json,

    /// Row table, semicolon delimited.
    Csv,

    /// Row table as JSON Lines. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("rows.csv").unwrap();
    /// assert_eq!(format, OutputFormat::Csv);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatStatError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatStatError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, csv, jsonl"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatStatError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes an analysis to a file in the specified format.
///
/// JSON writes the report; CSV and JSONL write the cleaned row table.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    analysis: &Analysis,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatStatError> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_report_json(&analysis.report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_rows_csv(&analysis.rows, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_rows_jsonl(&analysis.rows, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_error(format)),
    }
}

/// Converts an analysis to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(analysis: &Analysis, format: OutputFormat) -> Result<String, ChatStatError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_report_json(&analysis.report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_rows_csv(&analysis.rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_rows_jsonl(&analysis.rows),
        #[allow(unreachable_patterns)]
        _ => Err(feature_error(format)),
    }
}

#[allow(dead_code)]
fn feature_error(format: OutputFormat) -> ChatStatError {
    ChatStatError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}
