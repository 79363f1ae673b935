//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatStatError`] enum that covers every
//! failure the library can report.
//!
//! # Error Categories
//!
//! - **Input format**: malformed timestamp tokens, dates or times that do not
//!   resolve under the chosen day/month order. These abort an analysis.
//! - **Resources**: a missing stop-word list. Only the word-frequency
//!   aggregates depend on it; see [`crate::report`].
//! - **I/O and encoding**: unreadable files, non UTF-8 uploads, writer failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatStatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatStatError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A timestamp token does not contain a recognizable date or time.
    #[error("Malformed timestamp '{token}': no {missing} component found")]
    MalformedTimestamp {
        /// The offending timestamp token
        token: String,
        /// Which component was missing ("date" or "time")
        missing: &'static str,
    },

    /// A date string could not be resolved under the declared convention.
    #[error("Unparseable date '{input}' ({})", date_order(.day_first))]
    UnparseableDate {
        /// The offending date string
        input: String,
        /// The convention it was parsed under
        day_first: bool,
    },

    /// A time-of-day string could not be parsed.
    #[error("Unparseable time '{input}'")]
    UnparseableTime {
        /// The offending time string
        input: String,
    },

    /// The stop-word resource could not be loaded.
    #[error("Stop-word list unavailable ({}): {source}", .path.display())]
    StopWords {
        /// Path that was tried
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A named format (timestamp layout, output format) is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatStatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatStatError::Utf8 {
            context: "chat export".to_string(),
            source: err,
        }
    }
}

fn date_order(day_first: &bool) -> &'static str {
    if *day_first { "day-first" } else { "month-first" }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatStatError {
    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(token: impl Into<String>, missing: &'static str) -> Self {
        ChatStatError::MalformedTimestamp {
            token: token.into(),
            missing,
        }
    }

    /// Creates an unparseable date error.
    pub fn unparseable_date(input: impl Into<String>, day_first: bool) -> Self {
        ChatStatError::UnparseableDate {
            input: input.into(),
            day_first,
        }
    }

    /// Creates an unparseable time error.
    pub fn unparseable_time(input: impl Into<String>) -> Self {
        ChatStatError::UnparseableTime {
            input: input.into(),
        }
    }

    /// Creates a stop-word resource error.
    pub fn stop_words(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatStatError::StopWords {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatStatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatStatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this error comes from malformed export content.
    ///
    /// These are the errors that abort an analysis pipeline.
    pub fn is_input_format_error(&self) -> bool {
        matches!(
            self,
            ChatStatError::MalformedTimestamp { .. }
                | ChatStatError::UnparseableDate { .. }
                | ChatStatError::UnparseableTime { .. }
                | ChatStatError::Utf8 { .. }
        )
    }
}
