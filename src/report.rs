//! End-to-end analysis: raw export in, [`ChatReport`] out.
//!
//! The pipeline runs strictly forward:
//!
//! ```text
//! bytes -> tokenize -> build records -> derive fields -> filter -> clean -> aggregates
//! ```
//!
//! Input-format errors (malformed timestamps, unresolvable dates or times)
//! abort the run. A missing stop-word list only disables the two word
//! aggregates: they come back as `None` and the failure is listed in
//! [`ChatReport::warnings`].
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::report::Analyzer;
//!
//! let text = "1/1/23, 9:00 AM - Alice: Hello there\n\
//!             1/1/23, 9:05 AM - Bob: <Media omitted>\n\
//!             1/1/23, 9:10 AM - Alice: Bye";
//!
//! let analysis = Analyzer::new(AnalysisConfig::new().with_day_first(true)).analyze_str(text)?;
//! let report = &analysis.report;
//!
//! assert_eq!(report.counts.messages, 2);
//! assert_eq!(report.counts.media, 1);
//! assert_eq!(report.counts.words, 3);
//! # Ok::<(), chatstat::ChatStatError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::core::derive::derive_fields;
use crate::core::filter::{FilterConfig, UserSelection, apply_filters, participants};
use crate::core::frequency::{
    EmojiCount, WordCount, common_words, emoji_frequency, word_cloud_text,
};
use crate::core::stats::{ChatCounts, CleanedChat, UserActivity, clean, user_activity};
use crate::core::stopwords::{StopWordList, StopWords};
use crate::core::timeline::{
    DailyBucket, Heatmap, MonthlyBucket, NamedCount, activity_heatmap, daily_timeline,
    month_activity, monthly_timeline, weekday_activity,
};
use crate::error::ChatStatError;
use crate::message::Message;
use crate::parser::ChatParser;

/// Every summary value and aggregate table for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    /// Whose messages were analyzed.
    pub selection: UserSelection,
    /// All participants in the export, sorted.
    pub participants: Vec<String>,
    /// Scalar counts.
    pub counts: ChatCounts,
    /// Per-author activity. Empty unless the selection is everyone.
    pub user_activity: Vec<UserActivity>,
    /// Emoji frequency, most used first.
    pub emojis: Vec<EmojiCount>,
    /// Top words without stop words. `None` if the stop-word list was unavailable.
    pub common_words: Option<Vec<WordCount>>,
    /// Word-cloud input text. `None` if the stop-word list was unavailable.
    pub word_cloud_text: Option<String>,
    /// Messages per calendar month, oldest first.
    pub monthly_timeline: Vec<MonthlyBucket>,
    /// Messages per day, oldest first.
    pub daily_timeline: Vec<DailyBucket>,
    /// Messages per weekday, busiest first.
    pub weekday_activity: Vec<NamedCount>,
    /// Messages per month name, busiest first.
    pub month_activity: Vec<NamedCount>,
    /// Weekday x hour-period counts.
    pub heatmap: Heatmap,
    /// Aggregates that could not be computed, with the reason.
    pub warnings: Vec<String>,
}

impl ChatReport {
    /// Builds every aggregate over an already cleaned table.
    ///
    /// `stop_words` is the outcome of loading the list: an error disables
    /// only the word aggregates.
    pub fn build<S: StopWords>(
        cleaned: &CleanedChat,
        participants: Vec<String>,
        selection: UserSelection,
        stop_words: Result<&S, &ChatStatError>,
        top_words: usize,
    ) -> Self {
        let rows = &cleaned.rows;
        let mut warnings = Vec::new();

        let (common, cloud) = match stop_words {
            Ok(list) => (
                Some(common_words(rows, list, top_words)),
                Some(word_cloud_text(rows, list)),
            ),
            Err(e) => {
                warn!(error = %e, "skipping word statistics");
                warnings.push(format!("word statistics skipped: {e}"));
                (None, None)
            }
        };

        Self {
            user_activity: if selection.is_everyone() {
                user_activity(rows)
            } else {
                Vec::new()
            },
            selection,
            participants,
            counts: ChatCounts::from_cleaned(cleaned),
            emojis: emoji_frequency(rows),
            common_words: common,
            word_cloud_text: cloud,
            monthly_timeline: monthly_timeline(rows),
            daily_timeline: daily_timeline(rows),
            weekday_activity: weekday_activity(rows),
            month_activity: month_activity(rows),
            heatmap: activity_heatmap(rows),
            warnings,
        }
    }
}

/// Result of [`Analyzer`]: the cleaned table plus its report.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Cleaned rows, in export order.
    pub rows: Vec<Message>,
    /// Summary values and aggregates.
    pub report: ChatReport,
}

/// Runs the full parse-and-aggregate pipeline.
///
/// Each call works on its own row table; an `Analyzer` can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes an export file.
    pub fn analyze_path(&self, path: &Path) -> Result<Analysis, ChatStatError> {
        let bytes = fs::read(path)?;
        self.analyze_bytes(&bytes)
    }

    /// Analyzes raw uploaded bytes (UTF-8).
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<Analysis, ChatStatError> {
        let text = String::from_utf8(bytes.to_vec())?;
        self.analyze_str(&text)
    }

    /// Analyzes export text.
    pub fn analyze_str(&self, text: &str) -> Result<Analysis, ChatStatError> {
        let config = &self.config;

        let filter = self.filter_config()?;
        let raw = ChatParser::new()
            .with_layout_opt(config.layout)
            .parse_str(text)?;
        let rows = derive_fields(&raw, config.day_first)?;
        let everyone = participants(&rows);

        let selected = apply_filters(rows, &filter);
        let cleaned = clean(&selected);
        debug!(
            parsed = raw.len(),
            selected = cleaned.original_count(),
            media = cleaned.media_count,
            deleted = cleaned.deleted_count,
            notifications = cleaned.notification_count,
            "cleaned row table"
        );

        let stop_words = self.load_stop_words();
        let report = ChatReport::build(
            &cleaned,
            everyone,
            config.selection.clone(),
            stop_words.as_ref(),
            config.top_words,
        );

        info!(
            messages = report.counts.messages,
            words = report.counts.words,
            links = report.counts.links,
            "analysis complete"
        );

        Ok(Analysis {
            rows: cleaned.rows,
            report,
        })
    }

    fn filter_config(&self) -> Result<FilterConfig, ChatStatError> {
        let mut filter = FilterConfig::new().with_selection(self.config.selection.clone());
        if let Some(after) = &self.config.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.config.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    fn load_stop_words(&self) -> Result<StopWordList, ChatStatError> {
        match self.config.stop_words_path() {
            Some(path) => StopWordList::from_file(path),
            None => Err(ChatStatError::stop_words(
                "<not configured>",
                std::io::Error::new(std::io::ErrorKind::NotFound, "no stop-word list configured"),
            )),
        }
    }
}
