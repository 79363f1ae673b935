//! Integration tests for the full analysis pipeline with real files

use chatstat::core::timeline::{DailyBucket, NamedCount};
use chatstat::prelude::*;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

fn fixture(name: &str) -> PathBuf {
    ensure_fixtures();
    Path::new(fixtures_dir()).join(name)
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        // Android, day-first, mixed 12h/24h clock, multi-line body
        let android = "Messages and calls are end-to-end encrypted.
12/03/2023, 9:00 am - Priya added Rahul
12/03/2023, 9:01 am - Priya: Good morning everyone 😀
12/03/2023, 9:02 am - Rahul: Morning! Check https://example.com and www.test.org
12/03/2023, 9:03 am - Rahul: <Media omitted>
13/03/2023, 10:15 pm - Priya: This message was deleted
13/03/2023, 10:16 pm - Priya: Line one
line two 😀😀
14/04/2023, 23:59 - Rahul: late night 👍";
        fs::write(format!("{dir}/android_day_first.txt"), android).unwrap();

        // iOS bracketed, month-first
        let bracketed = "[1/15/24, 10:30:00 AM] Alice: Hello everyone!
[1/15/24, 10:31:00 AM] Bob: Hi Alice!
[1/15/24, 10:35:00 AM] Alice: <Media omitted>
[1/16/24, 8:05:12 PM] Bob: see you tomorrow";
        fs::write(format!("{dir}/bracketed_month_first.txt"), bracketed).unwrap();

        // Stop-word list
        fs::write(format!("{dir}/stop_words.txt"), "the a and\ncheck\n").unwrap();
    });
}

fn analyze(name: &str, config: AnalysisConfig) -> Analysis {
    Analyzer::new(config).analyze_path(&fixture(name)).unwrap()
}

// =========================================================================
// Worked scenarios
// =========================================================================

#[test]
fn test_hello_there_scenario() {
    let text = "1/1/23, 9:00 AM - Alice: Hello there\n\
                1/1/23, 9:05 AM - Bob: <Media omitted>\n\
                1/1/23, 9:10 AM - Alice: Bye";
    let analysis = Analyzer::new(AnalysisConfig::new().with_day_first(true))
        .analyze_str(text)
        .unwrap();
    let counts = analysis.report.counts;

    assert_eq!(counts.messages, 2);
    assert_eq!(counts.media, 1);
    // "Hello", "there", "Bye"
    assert_eq!(counts.words, 3);
    assert!(analysis.rows.iter().all(|row| row.author == "Alice"));
    assert_eq!(analysis.report.participants, vec!["Alice", "Bob"]);
}

#[test]
fn test_no_timestamps_is_empty_not_error() {
    let analysis = Analyzer::new(AnalysisConfig::new())
        .analyze_str("just some text\nwith no timestamps at all")
        .unwrap();
    let report = analysis.report;

    assert!(analysis.rows.is_empty());
    assert_eq!(report.counts, Default::default());
    assert!(report.emojis.is_empty());
    assert!(report.monthly_timeline.is_empty());
    assert!(report.daily_timeline.is_empty());
    assert!(report.weekday_activity.is_empty());
    assert!(report.month_activity.is_empty());
    assert!(report.heatmap.is_empty());
    assert!(report.user_activity.is_empty());
}

// =========================================================================
// Android export
// =========================================================================

#[test]
fn test_android_counts() {
    let report = analyze("android_day_first.txt", AnalysisConfig::new()).report;

    assert_eq!(report.counts.messages, 4);
    assert_eq!(report.counts.media, 1);
    assert_eq!(report.counts.deleted, 1);
    assert_eq!(report.counts.links, 2);
    assert_eq!(report.counts.words, 17);
    assert_eq!(report.participants, vec!["Priya", "Rahul"]);
}

#[test]
fn test_android_rows() {
    let rows = analyze("android_day_first.txt", AnalysisConfig::new()).rows;

    assert_eq!(rows[0].body, "Good morning everyone 😀");
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2023, 3, 12).unwrap());
    assert_eq!(rows[0].day_name, "Sunday");
    assert_eq!(rows[0].month_name, "March");

    // newline inside a message collapses to a space
    assert_eq!(rows[2].body, "Line one line two 😀😀");
    assert_eq!(rows[2].hour, 22);

    assert_eq!(rows[3].hour, 23);
    assert_eq!(rows[3].day_name, "Friday");
}

#[test]
fn test_android_emoji_and_users() {
    let report = analyze("android_day_first.txt", AnalysisConfig::new()).report;

    assert_eq!(report.emojis.len(), 2);
    assert_eq!(report.emojis[0].emoji, "😀");
    assert_eq!(report.emojis[0].count, 3);
    assert_eq!(report.emojis[1].emoji, "👍");

    // tie keeps first-seen order
    assert_eq!(report.user_activity[0].author, "Priya");
    assert_eq!(report.user_activity[1].author, "Rahul");
    assert!((report.user_activity[0].percentage - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_android_timelines() {
    let report = analyze("android_day_first.txt", AnalysisConfig::new()).report;

    let labels: Vec<_> = report
        .monthly_timeline
        .iter()
        .map(|b| (b.label.as_str(), b.count))
        .collect();
    assert_eq!(labels, vec![("3-2023", 3), ("4-2023", 1)]);

    assert_eq!(
        report.daily_timeline,
        vec![
            DailyBucket { date: NaiveDate::from_ymd_opt(2023, 3, 12).unwrap(), count: 2 },
            DailyBucket { date: NaiveDate::from_ymd_opt(2023, 3, 13).unwrap(), count: 1 },
            DailyBucket { date: NaiveDate::from_ymd_opt(2023, 4, 14).unwrap(), count: 1 },
        ]
    );

    assert_eq!(
        report.weekday_activity[0],
        NamedCount { name: "Sunday".into(), count: 2 }
    );
    assert_eq!(report.month_activity[0].name, "March");
}

#[test]
fn test_android_heatmap() {
    let heatmap = analyze("android_day_first.txt", AnalysisConfig::new()).report.heatmap;

    assert_eq!(heatmap.days, vec!["Monday", "Friday", "Sunday"]);
    assert_eq!(heatmap.periods, vec!["9-10", "22-23", "23-00"]);
    assert_eq!(heatmap.get("Sunday", "9-10"), Some(2));
    assert_eq!(heatmap.get("Monday", "22-23"), Some(1));
    assert_eq!(heatmap.get("Friday", "23-00"), Some(1));
    assert_eq!(heatmap.get("Friday", "9-10"), Some(0));
}

#[test]
fn test_android_month_first_keeps_unambiguous_dates() {
    let rows = analyze(
        "android_day_first.txt",
        AnalysisConfig::new().with_day_first(false),
    )
    .rows;

    // 12/03 reads either way, 13/03 and 14/04 only one way
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2023, 12, 3).unwrap());
    assert_eq!(rows[2].date, NaiveDate::from_ymd_opt(2023, 3, 13).unwrap());
    assert_eq!(rows[3].date, NaiveDate::from_ymd_opt(2023, 4, 14).unwrap());
}

#[test]
fn test_mixed_order_export_resolves_per_date() {
    let text = "1/4/23, 9:00 AM - Alice: hi\n25/04/2023, 9:00 AM - Bob: yo";
    let report = Analyzer::new(AnalysisConfig::new().with_day_first(false))
        .analyze_str(text)
        .unwrap()
        .report;

    assert_eq!(report.counts.messages, 2);
    let days: Vec<_> = report.daily_timeline.iter().map(|b| b.date).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2023, 1, 4).unwrap(),
            NaiveDate::from_ymd_opt(2023, 4, 25).unwrap(),
        ]
    );
}

#[test]
fn test_date_invalid_in_both_orders_aborts() {
    let err = Analyzer::new(AnalysisConfig::new().with_day_first(false))
        .analyze_str("13/13/23, 9:00 AM - Alice: hi")
        .unwrap_err();

    assert!(err.is_input_format_error());
    assert!(err.to_string().contains("13/13/23"));
}

#[test]
fn test_android_user_filter() {
    let report = analyze("android_day_first.txt", AnalysisConfig::new().with_user("Rahul")).report;

    assert_eq!(report.counts.messages, 2);
    assert_eq!(report.counts.media, 1);
    assert_eq!(report.counts.deleted, 0);
    assert_eq!(report.counts.links, 2);
    assert!(report.user_activity.is_empty());
    assert_eq!(report.emojis[0].emoji, "👍");
}

#[test]
fn test_android_date_filter() {
    let config = AnalysisConfig::new().with_after("2023-03-13").with_before("2023-03-31");
    let analysis = analyze("android_day_first.txt", config);

    assert_eq!(analysis.report.counts.messages, 1);
    assert_eq!(analysis.report.counts.deleted, 1);
    assert_eq!(analysis.rows[0].body, "Line one line two 😀😀");
}

#[test]
fn test_android_stop_words() {
    let config = AnalysisConfig::new().with_stop_words_path(fixture("stop_words.txt"));
    let report = analyze("android_day_first.txt", config).report;

    let words = report.common_words.unwrap();
    assert!(words.iter().all(|w| w.word != "and" && w.word != "check"));
    assert_eq!(words[0].word, "line");
    assert_eq!(words[0].count, 2);

    let cloud = report.word_cloud_text.unwrap();
    assert!(cloud.starts_with("good morning everyone"));
    assert!(!cloud.contains(" and "));
    assert!(report.warnings.is_empty());
}

// =========================================================================
// Bracketed export
// =========================================================================

#[test]
fn test_bracketed_detected_and_month_first() {
    let analysis = analyze(
        "bracketed_month_first.txt",
        AnalysisConfig::new().with_day_first(false),
    );

    assert_eq!(analysis.report.counts.messages, 3);
    assert_eq!(analysis.report.counts.media, 1);
    assert_eq!(analysis.report.counts.words, 7);

    let first = &analysis.rows[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(first.day_name, "Monday");
    assert_eq!(analysis.rows[2].hour, 20);
}

#[test]
fn test_bracketed_pinned_layout_matches_detection() {
    let detected = analyze(
        "bracketed_month_first.txt",
        AnalysisConfig::new().with_day_first(false),
    );
    let pinned = analyze(
        "bracketed_month_first.txt",
        AnalysisConfig::new()
            .with_day_first(false)
            .with_layout(TimestampLayout::Bracketed),
    );

    assert_eq!(detected.rows, pinned.rows);
}

#[test]
fn test_wrong_layout_finds_nothing() {
    let analysis = analyze(
        "bracketed_month_first.txt",
        AnalysisConfig::new()
            .with_day_first(false)
            .with_layout(TimestampLayout::Android),
    );
    assert!(analysis.rows.is_empty());
}

// =========================================================================
// Input handling
// =========================================================================

#[test]
fn test_analyze_bytes_rejects_invalid_utf8() {
    let err = Analyzer::new(AnalysisConfig::new())
        .analyze_bytes(&[0xff, 0xfe, 0x00])
        .unwrap_err();
    assert!(matches!(err, ChatStatError::Utf8 { .. }));
}

#[test]
fn test_missing_file() {
    let err = Analyzer::new(AnalysisConfig::new())
        .analyze_path(Path::new("tests/fixtures/does_not_exist.txt"))
        .unwrap_err();
    assert!(matches!(err, ChatStatError::Io(_)));
}

#[test]
fn test_crlf_export() {
    let text = "1/1/23, 9:00 AM - Alice: <Media omitted>\r\n1/1/23, 9:01 AM - Bob: hi\r\n";
    let report = Analyzer::new(AnalysisConfig::new()).analyze_str(text).unwrap().report;
    assert_eq!(report.counts.media, 1);
    assert_eq!(report.counts.messages, 1);
}

#[test]
fn test_narrow_no_break_space_before_pm() {
    let text = "1/1/23, 9:00\u{202f}PM - Alice: evening";
    let rows = ChatParser::new().parse_str(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].time, "9:00 PM");
}
