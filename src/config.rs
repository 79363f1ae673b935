//! Configuration for an analysis run.
//!
//! [`AnalysisConfig`] carries everything the pipeline needs besides the
//! export itself. It has no CLI framework dependencies and can be built in
//! code or deserialized from JSON.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::parsing::TimestampLayout;
//!
//! let config = AnalysisConfig::new()
//!     .with_day_first(false)
//!     .with_layout(TimestampLayout::Bracketed)
//!     .with_stop_words_path("stop_hinglish.txt")
//!     .with_user("Alice");
//!
//! assert!(!config.day_first);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::filter::UserSelection;
use crate::core::frequency::DEFAULT_TOP_WORDS;
use crate::parsing::TimestampLayout;

/// Settings for one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Whether the first date field is the day (default: true).
    pub day_first: bool,

    /// Timestamp layout; `None` detects it from the export (default: None).
    pub layout: Option<TimestampLayout>,

    /// Number of entries in the common-words table (default: 20).
    pub top_words: usize,

    /// Stop-word list used by the word statistics (default: None).
    ///
    /// Without it, common words and word-cloud text are not computed.
    pub stop_words_path: Option<PathBuf>,

    /// Whose messages are analyzed (default: everyone).
    pub selection: UserSelection,

    /// Inclusive start date, `YYYY-MM-DD` (default: None).
    pub after: Option<String>,

    /// Inclusive end date, `YYYY-MM-DD` (default: None).
    pub before: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            day_first: true,
            layout: None,
            top_words: DEFAULT_TOP_WORDS,
            stop_words_path: None,
            selection: UserSelection::Everyone,
            after: None,
            before: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month order.
    #[must_use]
    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.day_first = day_first;
        self
    }

    /// Pins the timestamp layout.
    #[must_use]
    pub fn with_layout(mut self, layout: TimestampLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets the size of the common-words table.
    #[must_use]
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Sets the stop-word list path.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Restricts the analysis to one participant.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.selection = UserSelection::User(user.into());
        self
    }

    /// Sets the participant selection.
    #[must_use]
    pub fn with_selection(mut self, selection: UserSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the inclusive start date (`YYYY-MM-DD`).
    #[must_use]
    pub fn with_after(mut self, date: impl Into<String>) -> Self {
        self.after = Some(date.into());
        self
    }

    /// Sets the inclusive end date (`YYYY-MM-DD`).
    #[must_use]
    pub fn with_before(mut self, date: impl Into<String>) -> Self {
        self.before = Some(date.into());
        self
    }

    /// Loads a configuration from a JSON file. Missing keys take defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Returns the stop-word path, if any, as a borrowed [`Path`].
    pub fn stop_words_path(&self) -> Option<&Path> {
        self.stop_words_path.as_deref()
    }
}
