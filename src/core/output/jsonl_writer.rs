//! JSON Lines (JSONL) output writer.
//!
//! One derived row per line, in export order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ChatStatError;
use crate::message::Message;

/// Writes the row table to a JSONL file.
///
/// # Format
/// ```text
/// {"date":"2023-01-01","time":"09:00:00","author":"Alice","body":"Hi",...}
/// {"date":"2023-01-01","time":"09:05:00","author":"Bob","body":"Hey",...}
/// ```
pub fn write_rows_jsonl(rows: &[Message], output_path: impl AsRef<Path>) -> Result<(), ChatStatError> {
    let file = File::create(output_path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the row table to a JSONL string.
pub fn to_rows_jsonl(rows: &[Message]) -> Result<String, ChatStatError> {
    let mut output = String::new();
    for row in rows {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive::derive_message;
    use crate::message::RawMessage;
    use tempfile::NamedTempFile;

    fn msg(author: &str, body: &str) -> Message {
        derive_message(&RawMessage::new("1/1/23", "9:00 AM", author, body), true).unwrap()
    }

    #[test]
    fn test_to_rows_jsonl() {
        let jsonl = to_rows_jsonl(&[msg("Alice", "Hello"), msg("Bob", "Hi")]).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["date"], "2023-01-01");
        assert_eq!(first["day_name"], "Sunday");
        assert_eq!(first["hour"], 9);
    }

    #[test]
    fn test_jsonl_lines_deserialize() {
        let rows = vec![msg("Alice", "Hello")];
        let jsonl = to_rows_jsonl(&rows).unwrap();
        let parsed: Message = serde_json::from_str(jsonl.trim_end()).unwrap();
        assert_eq!(parsed, rows[0]);
    }

    #[test]
    fn test_write_rows_jsonl_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_rows_jsonl(&[msg("Alice", "a"), msg("Bob", "b")], temp_file.path()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(to_rows_jsonl(&[]).unwrap(), "");
    }
}
