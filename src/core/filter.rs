//! Narrow a row table to one participant and/or a date range.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | User | [`with_user`](FilterConfig::with_user) | Messages from one participant |
//!
//! # Example
//!
//! ```
//! use chatstat::core::derive::derive_fields;
//! use chatstat::core::filter::{FilterConfig, apply_filters, participants};
//! use chatstat::parser::ChatParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "1/1/23, 9:00 AM - Alice: Hi\n\
//!             2/1/23, 9:00 AM - Bob: Hello\n\
//!             3/1/23, 9:00 AM - Alice: Bye";
//! let rows = derive_fields(&ChatParser::new().parse_str(text)?, true)?;
//!
//! assert_eq!(participants(&rows), vec!["Alice", "Bob"]);
//!
//! let config = FilterConfig::new()
//!     .with_user("Alice")
//!     .with_date_from("2023-01-02")?;
//! let filtered = apply_filters(rows, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "Bye");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - User matching is exact: display names are what the export prints.
//! - A user that sent nothing yields an empty table, not an error.
//! - Multiple filters are combined with AND logic.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatStatError;
use crate::message::{Message, NOTIFICATIONS_AUTHOR};

/// Whose messages an analysis covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSelection {
    /// Every participant.
    #[default]
    Everyone,
    /// A single participant, by display name.
    User(String),
}

impl UserSelection {
    /// Returns `true` if `author` is covered by this selection.
    pub fn matches(&self, author: &str) -> bool {
        match self {
            UserSelection::Everyone => true,
            UserSelection::User(name) => name == author,
        }
    }

    /// Returns `true` for [`UserSelection::Everyone`].
    pub fn is_everyone(&self) -> bool {
        matches!(self, UserSelection::Everyone)
    }
}

impl std::fmt::Display for UserSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserSelection::Everyone => write!(f, "Everyone"),
            UserSelection::User(name) => write!(f, "{name}"),
        }
    }
}

impl From<Option<String>> for UserSelection {
    fn from(user: Option<String>) -> Self {
        user.map_or(UserSelection::Everyone, UserSelection::User)
    }
}

/// Distinct participant names, sorted, without the notification sentinel.
pub fn participants(rows: &[Message]) -> Vec<String> {
    rows.iter()
        .map(|row| row.author.as_str())
        .filter(|author| *author != NOTIFICATIONS_AUTHOR)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Configuration for filtering rows by date and participant.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only messages covered by this selection.
    pub selection: UserSelection,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatStatError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatStatError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Restricts the table to one participant.
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

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || !self.selection.is_everyone()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    fn accepts(&self, msg: &Message) -> bool {
        self.selection.matches(&msg.author)
            && self.after.is_none_or(|after| msg.date >= after)
            && self.before.is_none_or(|before| msg.date <= before)
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatStatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatStatError::invalid_date(date_str))
}

/// Keeps the rows that pass every active filter, in original order.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.accepts(msg))
        .collect()
}
