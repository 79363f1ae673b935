//! Time-bucketed activity aggregates.
//!
//! - [`monthly_timeline`] and [`daily_timeline`] are in calendar order.
//! - [`weekday_activity`] and [`month_activity`] are frequency rankings,
//!   busiest bucket first.
//! - [`activity_heatmap`] cross-tabulates weekday against one-hour period
//!   labels such as `9-10`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::frequency::rank_by_frequency;
use crate::message::Message;

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Messages sent in this month.
    pub count: usize,
    /// Display label, `"{month}-{year}"`, e.g. `3-2023`.
    pub label: String,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// The day.
    pub date: NaiveDate,
    /// Messages sent on this day.
    pub count: usize,
}

/// Message count for a named bucket (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    /// Bucket name, e.g. `Monday` or `March`.
    pub name: String,
    /// Messages in this bucket.
    pub count: usize,
}

/// Groups messages by (year, month), oldest first.
pub fn monthly_timeline(rows: &[Message]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for row in rows {
        *buckets.entry((row.year, row.month)).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyBucket {
            year,
            month,
            count,
            label: format!("{month}-{year}"),
        })
        .collect()
}

/// Groups messages by calendar date, oldest first.
pub fn daily_timeline(rows: &[Message]) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for row in rows {
        *buckets.entry(row.date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyBucket { date, count })
        .collect()
}

fn named_ranking<'a>(names: impl Iterator<Item = &'a str>) -> Vec<NamedCount> {
    rank_by_frequency(names)
        .into_iter()
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Ranks weekdays by message count.
pub fn weekday_activity(rows: &[Message]) -> Vec<NamedCount> {
    named_ranking(rows.iter().map(|row| row.day_name.as_str()))
}

/// Ranks month names by message count.
pub fn month_activity(rows: &[Message]) -> Vec<NamedCount> {
    named_ranking(rows.iter().map(|row| row.month_name.as_str()))
}

/// Heatmap label for an hour: `"00-1"`, `"1-2"`, ..., `"22-23"`, `"23-00"`.
pub fn hour_period(hour: u32) -> String {
    match hour {
        0 => "00-1".to_string(),
        23 => "23-00".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// Weekday x hour-period message counts.
///
/// Only weekdays and periods that occur in the data get a row or column.
/// Rows run Monday to Sunday and columns run from midnight onward; cells
/// with no messages hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels (weekday names).
    pub days: Vec<String>,
    /// Column labels (hour periods, see [`hour_period`]).
    pub periods: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday and period, or `None` if either is absent.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.periods.iter().position(|p| p == period)?;
        self.counts.get(row)?.get(col).copied()
    }

    /// Returns the total for a weekday across all periods.
    pub fn day_total(&self, day: &str) -> usize {
        self.days
            .iter()
            .position(|d| d == day)
            .and_then(|row| self.counts.get(row))
            .map_or(0, |cells| cells.iter().sum())
    }

    /// Returns `true` if the heatmap has no cells.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Cross-tabulates weekday against hour period.
pub fn activity_heatmap(rows: &[Message]) -> Heatmap {
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for row in rows {
        let weekday = row.date.weekday().num_days_from_monday();
        *cells.entry((weekday, row.hour)).or_insert(0) += 1;
    }

    let mut day_keys: Vec<u32> = cells.keys().map(|&(d, _)| d).collect();
    day_keys.dedup();
    let mut hour_keys: Vec<u32> = cells.keys().map(|&(_, h)| h).collect();
    hour_keys.sort_unstable();
    hour_keys.dedup();

    let counts = day_keys
        .iter()
        .map(|&d| {
            hour_keys
                .iter()
                .map(|&h| cells.get(&(d, h)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: day_keys.iter().map(|&d| weekday_name(d)).collect(),
        periods: hour_keys.iter().map(|&h| hour_period(h)).collect(),
        counts,
    }
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn weekday_name(days_from_monday: u32) -> String {
    WEEKDAY_NAMES[days_from_monday as usize % 7].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive::derive_message;
    use crate::message::RawMessage;

    fn msg(date: &str, time: &str) -> Message {
        derive_message(&RawMessage::new(date, time, "Alice", "hi"), true).unwrap()
    }

    #[test]
    fn test_monthly_timeline_ordered() {
        let rows = vec![
            msg("5/3/23", "9:00 AM"),
            msg("1/1/23", "9:00 AM"),
            msg("2/1/23", "9:00 AM"),
            msg("1/1/22", "9:00 AM"),
        ];
        let timeline = monthly_timeline(&rows);
        let labels: Vec<_> = timeline.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["1-2022", "1-2023", "3-2023"]);
        assert_eq!(timeline[1].count, 2);
    }

    #[test]
    fn test_daily_timeline_ordered() {
        let rows = vec![
            msg("2/1/23", "9:00 AM"),
            msg("1/1/23", "9:00 AM"),
            msg("2/1/23", "10:00 AM"),
        ];
        let timeline = daily_timeline(&rows);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(timeline[1].count, 2);
    }

    #[test]
    fn test_weekday_activity_ranked() {
        // 1/1/23 Sunday, 2/1/23 Monday
        let rows = vec![
            msg("1/1/23", "9:00 AM"),
            msg("2/1/23", "9:00 AM"),
            msg("2/1/23", "9:00 AM"),
        ];
        let activity = weekday_activity(&rows);
        assert_eq!(activity[0], NamedCount { name: "Monday".into(), count: 2 });
        assert_eq!(activity[1], NamedCount { name: "Sunday".into(), count: 1 });
    }

    #[test]
    fn test_month_activity_ranked() {
        let rows = vec![
            msg("1/1/23", "9:00 AM"),
            msg("1/2/23", "9:00 AM"),
            msg("2/2/23", "9:00 AM"),
        ];
        let activity = month_activity(&rows);
        assert_eq!(activity[0].name, "February");
        assert_eq!(activity[1].name, "January");
    }

    #[test]
    fn test_hour_period_labels() {
        assert_eq!(hour_period(0), "00-1");
        assert_eq!(hour_period(1), "1-2");
        assert_eq!(hour_period(9), "9-10");
        assert_eq!(hour_period(22), "22-23");
        assert_eq!(hour_period(23), "23-00");
    }

    #[test]
    fn test_heatmap_cells() {
        let rows = vec![
            msg("2/1/23", "9:15 AM"),  // Monday 9
            msg("2/1/23", "9:45 AM"),  // Monday 9
            msg("1/1/23", "11:00 PM"), // Sunday 23
            msg("1/1/23", "12:10 AM"), // Sunday 0
        ];
        let heatmap = activity_heatmap(&rows);
        assert_eq!(heatmap.days, vec!["Monday", "Sunday"]);
        assert_eq!(heatmap.periods, vec!["00-1", "9-10", "23-00"]);
        assert_eq!(heatmap.get("Monday", "9-10"), Some(2));
        assert_eq!(heatmap.get("Monday", "23-00"), Some(0));
        assert_eq!(heatmap.get("Sunday", "00-1"), Some(1));
        assert_eq!(heatmap.get("Tuesday", "9-10"), None);
        assert_eq!(heatmap.day_total("Monday"), 2);
        assert_eq!(heatmap.day_total("Sunday"), 2);
    }

    #[test]
    fn test_heatmap_rows_match_weekday_activity() {
        let rows = vec![
            msg("2/1/23", "9:15 AM"),
            msg("3/1/23", "1:00 PM"),
            msg("3/1/23", "1:30 PM"),
            msg("8/1/23", "6:00 PM"),
        ];
        let heatmap = activity_heatmap(&rows);
        for day in weekday_activity(&rows) {
            assert_eq!(heatmap.day_total(&day.name), day.count);
        }
    }

    #[test]
    fn test_heatmap_lookup_with_short_rows() {
        let heatmap = Heatmap {
            days: vec!["Monday".into(), "Tuesday".into()],
            periods: vec!["9-10".into(), "10-11".into()],
            counts: vec![vec![3]],
        };
        assert_eq!(heatmap.get("Monday", "9-10"), Some(3));
        assert_eq!(heatmap.get("Monday", "10-11"), None);
        assert_eq!(heatmap.get("Tuesday", "9-10"), None);
        assert_eq!(heatmap.day_total("Tuesday"), 0);
    }

    #[test]
    fn test_empty_aggregates() {
        assert!(monthly_timeline(&[]).is_empty());
        assert!(daily_timeline(&[]).is_empty());
        assert!(weekday_activity(&[]).is_empty());
        assert!(month_activity(&[]).is_empty());
        assert!(activity_heatmap(&[]).is_empty());
    }
}
