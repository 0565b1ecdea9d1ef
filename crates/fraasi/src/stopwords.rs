// Case-insensitive stop-word set

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashSet;

use crate::FraasiError;

/// A set of stop-words with case-insensitive membership.
///
/// Words are normalized to uppercase when inserted and probes are
/// uppercased at comparison time, so `contains` is a single O(1) set
/// lookup regardless of the casing on either side.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Create an empty stop-word set.
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from an iterator of words, normalizing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(words);
        set
    }

    /// Load a stop-word list from a file.
    ///
    /// See [`StopWordSet::from_reader`] for the list format.
    pub fn from_path(path: &Path) -> Result<Self, FraasiError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Read a stop-word list: one word per line, surrounding whitespace
    /// trimmed. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, FraasiError> {
        let mut set = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            set.insert(word);
        }
        Ok(set)
    }

    /// Insert a single word, normalized to uppercase.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_uppercase());
    }

    /// Insert every word from the iterator.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_uppercase())
    }

    /// Number of distinct stop-words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set contains no stop-words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
