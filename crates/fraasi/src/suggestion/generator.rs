// Window-growth suggestion generation

use crate::stopwords::StopWordSet;

use super::builder::SuggestionBuilder;

/// Separator placed between the tokens of a combined suggestion.
const SEPARATOR: char = ' ';

/// Generates phrase suggestions from an ordered token stream.
///
/// For every start index the generator grows a window one token at a time,
/// up to `max_combined_words` tokens, and emits the accumulated phrase at
/// every step -- so a window of three valid tokens contributes three
/// suggestions, one per prefix. The first invalid token (too short, or a
/// stop-word) ends the window for that start index; it is not skipped over,
/// which keeps every suggestion a contiguous span of the stream.
///
/// All fields are fixed at construction, so a built generator can be
/// queried repeatedly (and shared across threads) with identical results.
pub struct SuggestionGenerator {
    tokens: Vec<String>,
    stop_words: StopWordSet,
    max_combined_words: usize,
    max_word_to_ignore_length: usize,
}

impl SuggestionGenerator {
    /// Start configuring a generator for the given token stream.
    pub fn builder<I, S>(tokens: I) -> SuggestionBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SuggestionBuilder::new(tokens)
    }

    pub(crate) fn new(
        tokens: Vec<String>,
        stop_words: StopWordSet,
        max_combined_words: usize,
        max_word_to_ignore_length: usize,
    ) -> Self {
        Self {
            tokens,
            stop_words,
            max_combined_words,
            max_word_to_ignore_length,
        }
    }

    /// Generate every suggestion from the token stream.
    ///
    /// Suggestions are ordered by start index, then by growing window
    /// length. Duplicates are possible when the stream repeats itself.
    /// An empty stream, or a window size of 0, yields an empty list.
    pub fn suggest(&self) -> Vec<String> {
        let mut suggestions = Vec::new();

        for start in 0..self.tokens.len() {
            let end = start
                .saturating_add(self.max_combined_words)
                .min(self.tokens.len());
            let mut phrase = String::new();

            for part in &self.tokens[start..end] {
                if self.is_invalid_token(part) {
                    break;
                }
                phrase.push_str(part);
                phrase.push(SEPARATOR);
                suggestions.push(phrase.trim_end().to_string());
            }
        }

        suggestions
    }

    /// Generate suggestions containing `keyword` as a case-insensitive
    /// substring, in the same relative order as [`SuggestionGenerator::suggest`].
    ///
    /// An empty keyword matches every suggestion.
    pub fn suggest_by_keyword(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_uppercase();
        self.suggest()
            .into_iter()
            .filter(|suggestion| suggestion.to_uppercase().contains(&needle))
            .collect()
    }

    /// A token is invalid if its character count is at or below the ignore
    /// threshold (empty tokens always are) or if it is a stop-word.
    ///
    /// The predicate decides whether a window stops growing; it never
    /// removes a token from the middle of a window.
    fn is_invalid_token(&self, part: &str) -> bool {
        part.chars().count() <= self.max_word_to_ignore_length
            || self.stop_words.contains(part)
    }

    /// The token stream this generator was built from.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The configured stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Maximum number of tokens combined into one suggestion.
    pub fn max_combined_words(&self) -> usize {
        self.max_combined_words
    }

    /// Ignore threshold: tokens at or below this character count end
    /// their window.
    pub fn max_word_to_ignore_length(&self) -> usize {
        self.max_word_to_ignore_length
    }
}
