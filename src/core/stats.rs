//! Cleaning pass and scalar counts.
//!
//! [`clean`] removes media, deleted and notification rows and reports how
//! many of each it removed. It returns a new table and leaves its input
//! alone, so a caller can keep the raw and cleaned views side by side.
//!
//! # Example
//!
//! ```
//! use chatstat::core::derive::derive_fields;
//! use chatstat::core::stats::{clean, count_words};
//! use chatstat::parser::ChatParser;
//!
//! let text = "1/1/23, 9:00 AM - Alice: Hello there\n\
//!             1/1/23, 9:05 AM - Bob: <Media omitted>\n\
//!             1/1/23, 9:10 AM - Alice: Bye";
//! let rows = derive_fields(&ChatParser::new().parse_str(text)?, true)?;
//! let cleaned = clean(&rows);
//!
//! assert_eq!(cleaned.message_count(), 2);
//! assert_eq!(cleaned.media_count, 1);
//! assert_eq!(count_words(&cleaned.rows), 3);
//! # Ok::<(), chatstat::ChatStatError>(())
//! ```

use linkify::{LinkFinder, LinkKind};
use serde::{Deserialize, Serialize};

use crate::core::frequency::rank_by_frequency;
use crate::message::Message;

/// The cleaned row table plus what was removed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedChat {
    /// Rows that remain after cleaning, in original order.
    pub rows: Vec<Message>,
    /// Rows removed because their body was `<Media omitted>`.
    pub media_count: usize,
    /// Rows removed because their body was `This message was deleted`.
    pub deleted_count: usize,
    /// Rows removed because they were notification lines.
    pub notification_count: usize,
}

impl CleanedChat {
    /// Number of rows left after cleaning.
    pub fn message_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows the cleaning pass saw.
    pub fn original_count(&self) -> usize {
        self.rows.len() + self.media_count + self.deleted_count + self.notification_count
    }
}

/// Removes media, deleted and notification rows, in that order.
pub fn clean(rows: &[Message]) -> CleanedChat {
    let mut cleaned = CleanedChat::default();

    for row in rows {
        if row.is_media() {
            cleaned.media_count += 1;
        } else if row.is_deleted() {
            cleaned.deleted_count += 1;
        } else if row.is_notification() {
            cleaned.notification_count += 1;
        } else {
            cleaned.rows.push(row.clone());
        }
    }

    cleaned
}

fn link_finder() -> LinkFinder {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);
    finder
}

/// Finds every URL in `text`.
///
/// Links with a scheme (`https://...`) and bare domains (`example.org`,
/// `www.rust-lang.org/learn`) both count. The domain of an email address
/// does not, and a bare domain needs an alphabetic top-level label of at
/// least two letters, so `e.g.` and `1.2.3` are not links.
pub fn find_links(text: &str) -> Vec<&str> {
    link_finder()
        .links(text)
        .filter(|link| is_web_link(text, link.start(), link.as_str()))
        .map(|link| link.as_str())
        .collect()
}

fn is_web_link(text: &str, start: usize, link: &str) -> bool {
    if link.contains("://") {
        return true;
    }
    if link.contains('@') || text[..start].ends_with('@') {
        return false;
    }

    let host = link
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default();
    host.rsplit_once('.').is_some_and(|(name, tld)| {
        !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    })
}

/// Counts URLs across all bodies. A body with three links counts three.
pub fn count_links(rows: &[Message]) -> usize {
    rows.iter().map(|row| find_links(&row.body).len()).sum()
}

/// Counts whitespace-separated tokens across all bodies.
///
/// Punctuation is not stripped: `"Hi!"` is one word.
pub fn count_words(rows: &[Message]) -> usize {
    rows.iter().map(|row| row.body.split_whitespace().count()).sum()
}

/// Per-author share of the messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    /// Author display name.
    pub author: String,
    /// Messages sent by this author.
    pub messages: usize,
    /// Share of all messages, in percent, rounded to two decimals.
    pub percentage: f64,
}

/// Ranks authors by message count, most active first.
///
/// Notification rows are skipped. Ties keep first-seen order.
pub fn user_activity(rows: &[Message]) -> Vec<UserActivity> {
    let ranked = rank_by_frequency(
        rows.iter()
            .filter(|row| !row.is_notification())
            .map(|row| row.author.as_str()),
    );
    let total = rows.len();

    ranked
        .into_iter()
        .map(|(author, messages)| UserActivity {
            author: author.to_string(),
            messages,
            percentage: percentage(messages, total),
        })
        .collect()
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Scalar counts reported for a cleaned table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCounts {
    /// Messages left after cleaning.
    pub messages: usize,
    /// Words across cleaned bodies.
    pub words: usize,
    /// URLs across cleaned bodies.
    pub links: usize,
    /// Media-omitted rows removed.
    pub media: usize,
    /// Deleted-message rows removed.
    pub deleted: usize,
}

impl ChatCounts {
    /// Computes all scalar counts for a cleaned table.
    pub fn from_cleaned(cleaned: &CleanedChat) -> Self {
        Self {
            messages: cleaned.message_count(),
            words: count_words(&cleaned.rows),
            links: count_links(&cleaned.rows),
            media: cleaned.media_count,
            deleted: cleaned.deleted_count,
        }
    }
}
