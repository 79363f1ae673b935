//! Emoji and word frequency tables.
//!
//! All rankings sort by descending count. Ties keep the order in which the
//! keys were first seen while counting.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::stopwords::StopWords;
use crate::message::Message;

/// Default number of entries in the common-words table.
pub const DEFAULT_TOP_WORDS: usize = 20;

// Emoji code points outside ASCII; digits, '#' and '*' only count as part
// of keycap sequences, which are not single characters.
static EMOJI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Emoji}--\p{ASCII}]").expect("static emoji pattern"));

/// Counts keys and ranks them by descending count, first-seen order on ties.
pub fn rank_by_frequency<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // stable sort keeps first-seen order for equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// One row of the emoji table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji character.
    pub emoji: String,
    /// Occurrences across all bodies.
    pub count: usize,
}

/// One row of the common-words table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The lowercased token.
    pub word: String,
    /// Occurrences across all bodies.
    pub count: usize,
}

/// Returns `true` if `c` is an emoji character.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// Counts every emoji character across all bodies.
///
/// All distinct emojis are returned, most frequent first.
pub fn emoji_frequency(rows: &[Message]) -> Vec<EmojiCount> {
    rank_by_frequency(
        rows.iter()
            .flat_map(|row| row.body.chars())
            .filter(|&c| is_emoji(c)),
    )
    .into_iter()
    .map(|(emoji, count)| EmojiCount {
        emoji: emoji.to_string(),
        count,
    })
    .collect()
}

/// Lowercased whitespace tokens of a body that are not stop words.
fn content_words<'a, S: StopWords>(
    body: &'a str,
    stop_words: &'a S,
) -> impl Iterator<Item = String> + 'a {
    body.split_whitespace()
        .map(str::to_lowercase)
        .filter(move |word| !stop_words.contains(word))
}

/// Ranks lowercased words, excluding stop words, and keeps the top `top_n`.
///
/// Punctuation is not stripped, matching [`count_words`](crate::core::stats::count_words).
pub fn common_words<S: StopWords>(rows: &[Message], stop_words: &S, top_n: usize) -> Vec<WordCount> {
    let mut ranked = rank_by_frequency(
        rows.iter()
            .flat_map(|row| content_words(&row.body, stop_words)),
    );
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Joins every non-stop-word token into one space-separated text.
///
/// This is the input a word-cloud renderer consumes.
pub fn word_cloud_text<S: StopWords>(rows: &[Message], stop_words: &S) -> String {
    rows.iter()
        .flat_map(|row| content_words(&row.body, stop_words))
        .collect::<Vec<_>>()
        .join(" ")
}
