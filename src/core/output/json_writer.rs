//! JSON output writer for the analysis report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ChatStatError;
use crate::report::ChatReport;

/// Writes the report to a pretty-printed JSON file.
pub fn write_report_json(
    report: &ChatReport,
    output_path: impl AsRef<Path>,
) -> Result<(), ChatStatError> {
    let file = File::create(output_path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_report_json(report: &ChatReport) -> Result<String, ChatStatError> {
    Ok(serde_json::to_string_pretty(report)?)
}
