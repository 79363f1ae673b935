//! Stop-word lists for word-frequency statistics.
//!
//! The list is an external resource: a plain text file of lowercase tokens
//! separated by whitespace (usually one per line). It is injected through the
//! [`StopWords`] trait so tests and embedders can supply their own sets.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ChatStatError;

/// Anything that can answer "is this token a stop word?".
pub trait StopWords {
    /// Returns `true` if `word` should be excluded from word statistics.
    fn contains(&self, word: &str) -> bool;
}

impl StopWords for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<T: StopWords + ?Sized> StopWords for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// An in-memory stop-word set.
///
/// # Example
///
/// ```
/// use chatstat::core::stopwords::{StopWordList, StopWords};
///
/// let list = StopWordList::from_words(["the", "and", "hai"]);
/// assert!(list.contains("hai"));
/// assert!(!list.contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopWordList {
    words: HashSet<String>,
}

impl StopWordList {
    /// Creates an empty list. Nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a whitespace-separated word list.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.split_whitespace())
    }

    /// Loads a list from a file.
    ///
    /// A missing or unreadable file is a [`ChatStatError::StopWords`] error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChatStatError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ChatStatError::stop_words(path, e))?;
        let list = Self::parse(&content);
        debug!(path = %path.display(), words = list.len(), "loaded stop-word list");
        Ok(list)
    }

    /// Returns the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
