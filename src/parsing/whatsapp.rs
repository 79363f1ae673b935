//! Timestamp layouts for WhatsApp TXT exports.
//!
//! WhatsApp prefixes every message with a locale-dependent timestamp. Each
//! [`TimestampLayout`] variant knows three patterns:
//!
//! - the **split** pattern that delimits one message from the next,
//! - the **date** pattern that pulls the date out of a split token,
//! - the **time** pattern that pulls the time out of a split token.
//!
//! Supported layouts:
//! - Android: `15/01/2024, 10:30 - Sender: Message`, `1/15/24, 9:05 PM - ...`
//!   (date separators `/`, `.` and `-` are all accepted)
//! - Bracketed: `[1/15/24, 10:30:45 AM] Sender: Message`
//!
//! The day/month order is never inferred here. It is supplied by the caller
//! when fields are derived (see [`crate::core::derive`]).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChatStatError;

/// Date sub-pattern shared by every layout: `D/M/YY`, `DD.MM.YYYY`, ...
const DATE_PATTERN: &str = r"\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}";

/// Time sub-pattern shared by every layout: `9:05`, `21:05:33`, `9:05 pm`.
const TIME_PATTERN: &str = r"\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp][Mm])?";

/// Number of leading lines sampled by [`TimestampLayout::detect`].
const DETECT_SAMPLE_LINES: usize = 20;

/// Named timestamp layouts found in WhatsApp exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TimestampLayout {
    /// `D/M/YY(YY), H:MM [AM|PM] - `
    /// Example: 26.10.2025, 20:40 - Sender: Message
    #[default]
    Android,
    /// `[D/M/YY(YY), H:MM:SS [AM|PM]] `
    /// Example: [1/15/24, 10:30:45 AM] Sender: Message
    #[serde(alias = "ios")]
    Bracketed,
}

/// Compiled patterns for one layout.
pub struct LayoutPatterns {
    /// Matches a whole timestamp token including its trailing delimiter.
    pub split: Regex,
    /// Same as `split`, anchored to the start of a line (used for detection).
    pub line_start: Regex,
    /// Extracts the date substring from a token.
    pub date: Regex,
    /// Extracts the time substring from a token.
    pub time: Regex,
}

impl LayoutPatterns {
    fn compile(split: &str) -> Self {
        Self {
            split: Regex::new(split).expect("static split pattern"),
            line_start: Regex::new(&format!("^{split}")).expect("static split pattern"),
            date: Regex::new(DATE_PATTERN).expect("static date pattern"),
            time: Regex::new(TIME_PATTERN).expect("static time pattern"),
        }
    }
}

static ANDROID: LazyLock<LayoutPatterns> = LazyLock::new(|| {
    LayoutPatterns::compile(&format!(
        r"{DATE_PATTERN},\s\d{{1,2}}:\d{{2}}(?::\d{{2}})?\s?(?:[AaPp][Mm]\s)?-\s"
    ))
});

static BRACKETED: LazyLock<LayoutPatterns> = LazyLock::new(|| {
    LayoutPatterns::compile(&format!(r"\[{DATE_PATTERN},\s{TIME_PATTERN}\]\s"))
});

impl TimestampLayout {
    /// Returns the compiled patterns for this layout.
    pub fn patterns(self) -> &'static LayoutPatterns {
        match self {
            TimestampLayout::Android => &ANDROID,
            TimestampLayout::Bracketed => &BRACKETED,
        }
    }

    /// Returns all layout variants.
    pub fn all() -> &'static [TimestampLayout] {
        &[TimestampLayout::Android, TimestampLayout::Bracketed]
    }

    /// Returns all accepted layout names.
    pub fn all_names() -> &'static [&'static str] {
        &["android", "bracketed", "ios"]
    }

    /// Picks the layout matching the most of the first 20 lines.
    ///
    /// Returns `None` if no layout matches any sampled line.
    pub fn detect(text: &str) -> Option<TimestampLayout> {
        let lines: Vec<&str> = text.lines().take(DETECT_SAMPLE_LINES).collect();

        let mut best: Option<(TimestampLayout, usize)> = None;
        for &layout in Self::all() {
            let patterns = layout.patterns();
            let score = lines
                .iter()
                .filter(|line| patterns.line_start.is_match(line))
                .count();
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((layout, score));
            }
        }

        best.map(|(layout, _)| layout)
    }

    /// Like [`detect`](Self::detect) but falls back to [`TimestampLayout::Android`].
    pub fn detect_or_default(text: &str) -> TimestampLayout {
        Self::detect(text).unwrap_or_default()
    }
}

impl std::fmt::Display for TimestampLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampLayout::Android => write!(f, "android"),
            TimestampLayout::Bracketed => write!(f, "bracketed"),
        }
    }
}

impl std::str::FromStr for TimestampLayout {
    type Err = ChatStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(TimestampLayout::Android),
            "bracketed" | "ios" => Ok(TimestampLayout::Bracketed),
            _ => Err(ChatStatError::invalid_format(
                "timestamp layout",
                format!(
                    "Unknown layout '{}'. Expected one of: {}",
                    s,
                    TimestampLayout::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Replaces the non-breaking spaces WhatsApp puts around AM/PM with plain spaces.
pub fn normalize_spaces(text: &str) -> String {
    text.replace(['\u{202f}', '\u{00a0}'], " ")
}
