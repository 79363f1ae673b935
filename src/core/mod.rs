//! Core processing logic for chatstat.
//!
//! This module contains:
//! - [`derive`] - Calendar fields from raw date and time strings
//! - [`filter`] - Participant and date-range selection
//! - [`stats`] - Cleaning, scalar counts and per-author activity
//! - [`stopwords`] - The stop-word capability used by word statistics
//! - [`frequency`] - Emoji and word frequency tables
//! - [`timeline`] - Time-bucketed activity and the weekday/hour heatmap
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{clean, derive_fields, emoji_frequency, monthly_timeline};
//! use chatstat::parser::ChatParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let raw = ChatParser::new().parse_str("1/1/23, 9:00 AM - Alice: Hi 👋")?;
//! let cleaned = clean(&derive_fields(&raw, true)?);
//!
//! assert_eq!(emoji_frequency(&cleaned.rows)[0].emoji, "👋");
//! assert_eq!(monthly_timeline(&cleaned.rows)[0].label, "1-2023");
//! # Ok(())
//! # }
//! ```

pub mod derive;
pub mod filter;
pub mod frequency;
pub mod output;
pub mod stats;
pub mod stopwords;
pub mod timeline;

pub use derive::derive_fields;
pub use filter::{FilterConfig, UserSelection, apply_filters, participants};
pub use frequency::{common_words, emoji_frequency, word_cloud_text};
pub use stats::{ChatCounts, CleanedChat, clean, count_links, count_words, user_activity};
pub use stopwords::{StopWordList, StopWords};
pub use timeline::{
    Heatmap, activity_heatmap, daily_timeline, month_activity, monthly_timeline, weekday_activity,
};

#[cfg(feature = "csv-output")]
pub use output::{to_rows_csv, write_rows_csv};
#[cfg(feature = "json-output")]
pub use output::{to_report_json, to_rows_jsonl, write_report_json, write_rows_jsonl};
