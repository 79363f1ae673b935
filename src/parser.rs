//! Tokenizer and record builder for WhatsApp TXT exports.
//!
//! Parsing runs in two steps:
//!
//! 1. [`tokenize`] normalizes whitespace, splits the text on timestamp tokens
//!    and separates each segment into an optional author and a body.
//! 2. [`build_records`] pulls the date and time substrings out of each
//!    timestamp token and produces one [`RawMessage`] per segment.
//!
//! [`ChatParser`] wraps both steps for strings, raw bytes and files.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::ChatParser;
//!
//! let text = "1/1/23, 9:00 AM - Alice: Hello there\n1/1/23, 9:05 AM - Bob: Hi";
//! let rows = ChatParser::new().parse_str(text)?;
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].author, "Alice");
//! assert_eq!(rows[1].body, "Hi");
//! # Ok::<(), chatstat::ChatStatError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ChatStatError;
use crate::message::{NOTIFICATIONS_AUTHOR, RawMessage};
use crate::parsing::{TimestampLayout, normalize_spaces};

/// One message-sized slice of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The timestamp token that opened this segment, delimiter included.
    pub timestamp: String,
    /// The author, or `None` for a system/notification line.
    pub author: Option<String>,
    /// The message text.
    pub body: String,
}

/// Splits raw export text into segments.
///
/// Text before the first timestamp is discarded. Text without any
/// timestamp yields an empty vector.
pub fn tokenize(text: &str, layout: TimestampLayout) -> Vec<Segment> {
    let normalized = normalize_spaces(text)
        .replace("\r\n", "\n")
        .replace('\n', " ");

    let split = &layout.patterns().split;
    let matches: Vec<_> = split.find_iter(&normalized).collect();

    let mut segments = Vec::with_capacity(matches.len());
    for (i, m) in matches.iter().enumerate() {
        let end = matches
            .get(i + 1)
            .map_or(normalized.len(), |next| next.start());
        let (author, body) = split_author(&normalized[m.end()..end]);

        segments.push(Segment {
            timestamp: m.as_str().to_string(),
            author: author.map(str::to_string),
            body: body.trim_end().to_string(),
        });
    }

    segments
}

/// Counts timestamp tokens in `text`, independently of segmentation.
pub fn count_timestamps(text: &str, layout: TimestampLayout) -> usize {
    let normalized = normalize_spaces(text).replace('\n', " ");
    layout.patterns().split.find_iter(&normalized).count()
}

/// Splits a segment on its first `Name: ` prefix.
///
/// The name is the shortest non-empty run of characters followed by `": "`.
/// Returns `(None, segment)` when there is no such prefix.
pub fn split_author(segment: &str) -> (Option<&str>, &str) {
    segment
        .match_indices(": ")
        .find(|(idx, _)| *idx > 0)
        .map_or((None, segment), |(idx, sep)| {
            (Some(&segment[..idx]), &segment[idx + sep.len()..])
        })
}

/// Turns segments into raw rows.
///
/// Fails with [`ChatStatError::MalformedTimestamp`] if a token has no
/// recognizable date or time.
pub fn build_records(
    segments: Vec<Segment>,
    layout: TimestampLayout,
) -> Result<Vec<RawMessage>, ChatStatError> {
    let patterns = layout.patterns();

    segments
        .into_iter()
        .map(|segment| {
            let date = patterns
                .date
                .find(&segment.timestamp)
                .ok_or_else(|| ChatStatError::malformed_timestamp(&segment.timestamp, "date"))?;
            let time = patterns
                .time
                .find(&segment.timestamp)
                .ok_or_else(|| ChatStatError::malformed_timestamp(&segment.timestamp, "time"))?;

            Ok(RawMessage {
                date: date.as_str().to_string(),
                time: time.as_str().to_string(),
                author: segment
                    .author
                    .unwrap_or_else(|| NOTIFICATIONS_AUTHOR.to_string()),
                body: segment.body,
            })
        })
        .collect()
}

/// Parser for WhatsApp TXT exports.
///
/// By default the timestamp layout is detected from the first lines of the
/// export. Pin it with [`with_layout`](Self::with_layout) when the export is
/// known.
///
/// # Example
///
/// ```rust
/// use chatstat::parser::ChatParser;
/// use chatstat::parsing::TimestampLayout;
///
/// let parser = ChatParser::new().with_layout(TimestampLayout::Bracketed);
/// let rows = parser.parse_str("[1/15/24, 10:30:45 AM] Alice: Hello")?;
/// assert_eq!(rows[0].time, "10:30:45 AM");
/// # Ok::<(), chatstat::ChatStatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    layout: Option<TimestampLayout>,
}

impl ChatParser {
    /// Creates a parser that detects the timestamp layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the timestamp layout.
    #[must_use]
    pub fn with_layout(mut self, layout: TimestampLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets or clears the pinned layout.
    #[must_use]
    pub fn with_layout_opt(mut self, layout: Option<TimestampLayout>) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the layout that will be used for `text`.
    pub fn layout_for(&self, text: &str) -> TimestampLayout {
        self.layout
            .unwrap_or_else(|| TimestampLayout::detect_or_default(text))
    }

    /// Parses export text into raw rows.
    pub fn parse_str(&self, text: &str) -> Result<Vec<RawMessage>, ChatStatError> {
        let layout = self.layout_for(text);
        let segments = tokenize(text, layout);
        debug!(%layout, segments = segments.len(), "tokenized export");
        build_records(segments, layout)
    }

    /// Parses raw uploaded bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<RawMessage>, ChatStatError> {
        let text = String::from_utf8(bytes.to_vec())?;
        self.parse_str(&text)
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<RawMessage>, ChatStatError> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }
}
