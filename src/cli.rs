//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Layout`] - Timestamp layout choices
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::to_config`] turns parsed arguments into an
//! [`AnalysisConfig`], optionally layered over a JSON config file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::error::ChatStatError;
use crate::parsing::TimestampLayout;

/// Compute message, word, emoji and activity statistics from a WhatsApp
/// chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --month-first --stop-words stop_hinglish.txt
    chatstat chat.txt --user Alice -o alice.json
    chatstat chat.txt --after 2024-01-01 -f csv -o rows.csv
    chatstat chat.txt --layout bracketed")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Dates in the export are month-first (M/D/Y); default is day-first
    #[arg(long)]
    pub month_first: bool,

    /// Timestamp layout; detected from the export when omitted
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Stop-word list, one or more words per line
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Analyze a single participant instead of everyone
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Path to output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; taken from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of entries in the common-words table
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// JSON file with analysis settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the analysis configuration from the config file (if any)
    /// with command-line flags applied on top.
    pub fn to_config(&self) -> Result<AnalysisConfig, ChatStatError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::new(),
        };

        if self.month_first {
            config = config.with_day_first(false);
        }
        if let Some(layout) = self.layout {
            config = config.with_layout(layout.into());
        }
        if let Some(path) = &self.stop_words {
            config = config.with_stop_words_path(path);
        }
        if let Some(user) = &self.user {
            config = config.with_selection(UserSelection::User(user.clone()));
        }
        if let Some(after) = &self.after {
            config = config.with_after(after);
        }
        if let Some(before) = &self.before {
            config = config.with_before(before);
        }
        if let Some(top_words) = self.top_words {
            config = config.with_top_words(top_words);
        }

        Ok(config)
    }

    /// Resolves the output format: explicit flag, then output extension,
    /// then JSON.
    pub fn output_format(&self) -> Result<crate::format::OutputFormat, ChatStatError> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path),
            (None, None) => Ok(crate::format::OutputFormat::default()),
        }
    }
}

/// Timestamp layouts selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `12/31/23, 9:15 PM - Name: text`
    Android,

    /// `[12/31/23, 9:15:02 PM] Name: text`
    #[value(alias = "ios")]
    #[serde(alias = "ios")]
    Bracketed,
}

impl From<Layout> for TimestampLayout {
    fn from(layout: Layout) -> TimestampLayout {
        match layout {
            Layout::Android => TimestampLayout::Android,
            Layout::Bracketed => TimestampLayout::Bracketed,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report as pretty JSON
    Json,

    /// Cleaned row table, semicolon delimited
    Csv,

    /// Cleaned row table, one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        let config = args.to_config().unwrap();

        assert!(config.day_first);
        assert_eq!(config.layout, None);
        assert!(config.selection.is_everyone());
        assert_eq!(args.output_format().unwrap(), crate::format::OutputFormat::Json);
    }

    #[test]
    fn test_flags_to_config() {
        let args = parse(&[
            "chat.txt",
            "--month-first",
            "--layout",
            "ios",
            "--user",
            "Alice",
            "--stop-words",
            "stop.txt",
            "--top-words",
            "5",
            "--after",
            "2024-01-01",
        ]);
        let config = args.to_config().unwrap();

        assert!(!config.day_first);
        assert_eq!(config.layout, Some(TimestampLayout::Bracketed));
        assert_eq!(config.selection, UserSelection::User("Alice".into()));
        assert_eq!(config.top_words, 5);
        assert_eq!(config.after.as_deref(), Some("2024-01-01"));
        assert!(config.stop_words_path().is_some());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"day_first": false, "top_words": 3}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = parse(&["chat.txt", "--config", &path, "--top-words", "7"]);
        let config = args.to_config().unwrap();

        assert!(!config.day_first);
        assert_eq!(config.top_words, 7);
    }

    #[test]
    fn test_output_format_resolution() {
        let args = parse(&["chat.txt", "-o", "rows.csv"]);
        assert_eq!(args.output_format().unwrap(), crate::format::OutputFormat::Csv);

        let args = parse(&["chat.txt", "-o", "rows.csv", "-f", "jsonl"]);
        assert_eq!(args.output_format().unwrap(), crate::format::OutputFormat::Jsonl);

        let args = parse(&["chat.txt", "-o", "rows.txt"]);
        assert!(args.output_format().is_err());
    }

    #[test]
    fn test_layout_serde() {
        let parsed: Layout = serde_json::from_str("\"ios\"").unwrap();
        assert_eq!(parsed, Layout::Bracketed);
    }
}
