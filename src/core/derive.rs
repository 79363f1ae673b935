//! Calendar field derivation.
//!
//! Turns [`RawMessage`] rows into [`Message`] rows by resolving the date
//! under a caller-chosen convention and computing the calendar fields the
//! statistics engine groups by.
//!
//! The convention is never guessed: `03/04/2023` is 3 April with
//! `day_first = true` and 4 March with `day_first = false`. `25/04/2023` is
//! 25 April either way. A date with no valid reading is an error, not a
//! dropped row.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::error::ChatStatError;
use crate::message::{Message, RawMessage};

/// Derives calendar fields for every row.
///
/// Stops at the first row whose date or time cannot be resolved.
pub fn derive_fields(rows: &[RawMessage], day_first: bool) -> Result<Vec<Message>, ChatStatError> {
    let derived = rows
        .iter()
        .map(|row| derive_message(row, day_first))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = derived.len(), day_first, "derived calendar fields");
    Ok(derived)
}

/// Derives calendar fields for a single row.
pub fn derive_message(row: &RawMessage, day_first: bool) -> Result<Message, ChatStatError> {
    let date = parse_date(&row.date, day_first)?;
    let time = parse_time(&row.time)?;

    Ok(Message {
        date,
        time,
        author: row.author.clone(),
        body: row.body.clone(),
        year: date.year(),
        month: date.month(),
        day: date.day(),
        day_name: date.format("%A").to_string(),
        hour: time.hour(),
        month_name: date.format("%B").to_string(),
    })
}

/// Parses a `D/M/Y` (or `M/D/Y`) date with any of the `/`, `.`, `-` separators.
///
/// `day_first` picks the reading of a date that is valid both ways. A date
/// valid only one way (`25/04/2023`) resolves to that reading under either
/// flag; a date valid neither way is [`ChatStatError::UnparseableDate`].
///
/// Two-digit years pivot at 69: `00`-`68` are 20xx, `69`-`99` are 19xx.
pub fn parse_date(input: &str, day_first: bool) -> Result<NaiveDate, ChatStatError> {
    let err = || ChatStatError::unparseable_date(input, day_first);

    let parts: Vec<&str> = input.trim().split(['/', '.', '-']).collect();
    let [first, second, year] = parts.as_slice() else {
        return Err(err());
    };

    let first: u32 = first.parse().map_err(|_| err())?;
    let second: u32 = second.parse().map_err(|_| err())?;
    let year = expand_year(year).ok_or_else(err)?;

    let (preferred, swapped) = if day_first {
        ((first, second), (second, first))
    } else {
        ((second, first), (first, second))
    };

    // The flag only decides dates that are valid both ways.
    [preferred, swapped]
        .into_iter()
        .find_map(|(day, month)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(err)
}

fn expand_year(raw: &str) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    match raw.len() {
        2 if value < 69 => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

/// Parses a 12-hour (`9:05 PM`, `9:05pm`) or 24-hour (`21:05`) time.
pub fn parse_time(input: &str) -> Result<NaiveTime, ChatStatError> {
    let upper = input.trim().to_uppercase();

    let (clock, meridiem) = match upper
        .strip_suffix("AM")
        .map(|rest| (rest, "AM"))
        .or_else(|| upper.strip_suffix("PM").map(|rest| (rest, "PM")))
    {
        Some((rest, m)) => (rest.trim_end(), Some(m)),
        None => (upper.as_str(), None),
    };

    let formats: &[&str] = if meridiem.is_some() {
        &["%I:%M:%S %p", "%I:%M %p"]
    } else {
        &["%H:%M:%S", "%H:%M"]
    };
    let candidate = match meridiem {
        Some(m) => format!("{clock} {m}"),
        None => clock.to_string(),
    };

    formats
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&candidate, fmt).ok())
        .ok_or_else(|| ChatStatError::unparseable_time(input))
}
