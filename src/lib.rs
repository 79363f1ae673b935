//! # Chatstat
//!
//! A Rust library for parsing WhatsApp chat exports and computing message,
//! word, emoji and activity statistics.
//!
//! ## Overview
//!
//! An export is a plain-text file where every message starts with a
//! timestamp, optionally followed by `Author: `. Chatstat splits the text on
//! those timestamps, derives calendar fields for each message, drops media
//! placeholders, deleted-message placeholders and system notifications, and
//! aggregates what remains.
//!
//! Two timestamp layouts are recognised:
//! - **Android**: `12/31/23, 9:15 PM - Alice: text`
//! - **Bracketed** (iOS): `[12/31/23, 9:15:02 PM] Alice: text`
//!
//! Whether the date is day-first or month-first cannot be told from the text
//! and is always supplied by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "31/12/23, 9:15 pm - Alice: Happy new year 🎉\n\
//!                 31/12/23, 9:16 pm - Bob: <Media omitted>\n\
//!                 1/1/24, 12:01 am - Bob: https://example.com/fireworks";
//!
//!     let analysis = Analyzer::new(AnalysisConfig::new().with_day_first(true)).analyze_str(text)?;
//!     let report = &analysis.report;
//!
//!     assert_eq!(report.counts.messages, 2);
//!     assert_eq!(report.counts.media, 1);
//!     assert_eq!(report.counts.links, 1);
//!     assert_eq!(report.emojis[0].emoji, "🎉");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`]: timestamp layouts and their patterns
//! - [`parser`]: tokenizer and record builder ([`ChatParser`](parser::ChatParser))
//! - [`core`]: field derivation, filtering, cleaning and aggregates
//! - [`report`]: the end-to-end [`Analyzer`](report::Analyzer) and [`ChatReport`](report::ChatReport)
//! - [`config`]: [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`]: [`OutputFormat`](format::OutputFormat) and writers
//! - [`error`]: [`ChatStatError`], [`Result`]
//! - [`prelude`]: convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod report;

pub use error::{ChatStatError, Result};
pub use message::{Message, RawMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, RawMessage};

    pub use crate::error::{ChatStatError, Result};

    pub use crate::config::AnalysisConfig;
    pub use crate::parser::ChatParser;
    pub use crate::parsing::TimestampLayout;
    pub use crate::report::{Analysis, Analyzer, ChatReport};

    pub use crate::core::filter::{FilterConfig, UserSelection, apply_filters, participants};
    pub use crate::core::stopwords::{StopWordList, StopWords};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
