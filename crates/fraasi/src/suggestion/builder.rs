// Staged configuration for the suggestion generator

use crate::stopwords::StopWordSet;

use super::generator::SuggestionGenerator;

/// Default number of tokens combined into one suggestion window.
const DEFAULT_MAX_COMBINED_WORDS: usize = 3;

/// Default ignore threshold: tokens of one character or less are skipped.
const DEFAULT_MAX_WORD_TO_IGNORE_LENGTH: usize = 1;

/// Fluent builder for [`SuggestionGenerator`].
///
/// Collects the token stream and configuration step by step; every setter
/// consumes and returns the builder so calls can be chained. None of the
/// numeric settings are range-validated: a window size of 0 simply yields
/// no suggestions.
///
/// ```
/// use fraasi::SuggestionGenerator;
///
/// let generator = SuggestionGenerator::builder(["beautiful", "girl"])
///     .stop_words(["the"])
///     .max_combined_words(2)
///     .build();
/// assert_eq!(
///     generator.suggest(),
///     ["beautiful", "beautiful girl", "girl"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionBuilder {
    tokens: Vec<String>,
    stop_words: StopWordSet,
    max_combined_words: usize,
    max_word_to_ignore_length: usize,
}

impl SuggestionBuilder {
    /// Start a builder from an ordered token stream. An empty stream is
    /// allowed and produces a generator with no suggestions.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            stop_words: StopWordSet::new(),
            max_combined_words: DEFAULT_MAX_COMBINED_WORDS,
            max_word_to_ignore_length: DEFAULT_MAX_WORD_TO_IGNORE_LENGTH,
        }
    }

    /// Add stop-words, normalized case-insensitively at set time.
    /// An empty iterator leaves the set unchanged.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(words);
        self
    }

    /// Replace the stop-word set wholesale, e.g. with one loaded from a
    /// list file via [`StopWordSet::from_path`].
    pub fn stop_word_set(mut self, set: StopWordSet) -> Self {
        self.stop_words = set;
        self
    }

    /// Set the maximum number of tokens combined into one suggestion.
    pub fn max_combined_words(mut self, max_combined_words: usize) -> Self {
        self.max_combined_words = max_combined_words;
        self
    }

    /// Set the ignore threshold: tokens whose character count is less than
    /// or equal to this value end the window they appear in.
    pub fn max_word_to_ignore_length(mut self, max_word_to_ignore_length: usize) -> Self {
        self.max_word_to_ignore_length = max_word_to_ignore_length;
        self
    }

    /// Build the immutable generator.
    pub fn build(self) -> SuggestionGenerator {
        SuggestionGenerator::new(
            self.tokens,
            self.stop_words,
            self.max_combined_words,
            self.max_word_to_ignore_length,
        )
    }
}
