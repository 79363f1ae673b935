//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChatStatError;
use crate::message::Message;

/// Column order of the row table.
pub const CSV_HEADER: [&str; 10] = [
    "date",
    "time",
    "author",
    "body",
    "year",
    "month",
    "day",
    "day_name",
    "hour",
    "month_name",
];

/// Writes the row table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`CSV_HEADER`]; `date` is `YYYY-MM-DD`, `time` is `HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_rows_csv(rows: &[Message], output_path: impl AsRef<Path>) -> Result<(), ChatStatError> {
    let file = File::create(output_path.as_ref())?;
    write_rows(rows, file)
}

/// Converts the row table to a CSV string.
///
/// Same format as [`write_rows_csv`].
pub fn to_rows_csv(rows: &[Message]) -> Result<String, ChatStatError> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|source| ChatStatError::Utf8 {
        context: "CSV output".to_string(),
        source,
    })
}

fn write_rows<W: Write>(rows: &[Message], out: W) -> Result<(), ChatStatError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record(build_record(row))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(row: &Message) -> [String; 10] {
    [
        row.date.format("%Y-%m-%d").to_string(),
        row.time.format("%H:%M:%S").to_string(),
        row.author.clone(),
        row.body.clone(),
        row.year.to_string(),
        row.month.to_string(),
        row.day.to_string(),
        row.day_name.clone(),
        row.hour.to_string(),
        row.month_name.clone(),
    ]
}
