//! Row types for parsed chat exports.
//!
//! Parsing produces two shapes of the same row:
//!
//! - [`RawMessage`]: the date, time, author and body exactly as segmented
//!   from the export. The date is still ambiguous at this stage.
//! - [`Message`]: a [`RawMessage`] plus calendar fields resolved under a
//!   day-first or month-first convention.
//!
//! # Sentinels
//!
//! Exports use fixed marker values in place of real content:
//!
//! | Constant | Meaning |
//! |----------|---------|
//! | [`NOTIFICATIONS_AUTHOR`] | system/group-event line without a sender |
//! | [`MEDIA_OMITTED`] | an attachment left out of the export |
//! | [`MESSAGE_DELETED`] | a message deleted by its author |
//!
//! # Example
//!
//! ```
//! use chatstat::message::{RawMessage, NOTIFICATIONS_AUTHOR};
//!
//! let row = RawMessage::new("1/1/23", "9:00 AM", NOTIFICATIONS_AUTHOR, "Alice joined");
//! assert!(row.is_notification());
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Author assigned to lines that have no `Name: ` prefix.
pub const NOTIFICATIONS_AUTHOR: &str = "Notifications";

/// Body of a message whose attachment was left out of the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Body of a message that was deleted by its author.
pub const MESSAGE_DELETED: &str = "This message was deleted";

/// A row as segmented from the export, before calendar derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Date substring, e.g. `1/15/24` (day/month order unresolved).
    pub date: String,
    /// Time substring, e.g. `9:05 PM` or `21:05`.
    pub time: String,
    /// Display name, or [`NOTIFICATIONS_AUTHOR`].
    pub author: String,
    /// Message text with newlines collapsed to spaces.
    pub body: String,
}

impl RawMessage {
    /// Creates a new raw row.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns `true` if this row is a system/notification line.
    pub fn is_notification(&self) -> bool {
        self.author == NOTIFICATIONS_AUTHOR
    }
}

/// A chat message with derived calendar fields.
///
/// Every derived field is a pure function of `date`/`time` and the
/// day-first flag the row table was derived with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Resolved calendar date.
    pub date: NaiveDate,
    /// Resolved time of day.
    pub time: NaiveTime,
    /// Display name, or [`NOTIFICATIONS_AUTHOR`].
    pub author: String,
    /// Message text.
    pub body: String,
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Weekday name, e.g. `Monday`.
    pub day_name: String,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Month name, e.g. `January`.
    pub month_name: String,
}

impl Message {
    /// Returns the author of the message.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if this row is a system/notification line.
    pub fn is_notification(&self) -> bool {
        self.author == NOTIFICATIONS_AUTHOR
    }

    /// Returns `true` if the body is the media-omitted sentinel.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Returns `true` if the body is the deleted-message sentinel.
    pub fn is_deleted(&self) -> bool {
        self.body == MESSAGE_DELETED
    }
}
