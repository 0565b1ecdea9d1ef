//! Phrase suggestion engine for pre-tokenized text.
//!
//! This crate builds short multi-word suggestion phrases from an ordered
//! token stream. Windows of consecutive tokens are combined up to a
//! configurable size, every valid prefix of a window is emitted as its own
//! suggestion, and a stop-word or too-short token ends the window it
//! appears in. Tokenization is an external concern: callers hand in a
//! sequence that has already been split into words and punctuation.
//!
//! # Architecture
//!
//! - [`stopwords`] -- Case-insensitive stop-word set and list-file loading
//! - [`suggestion`] -- Suggestion builder and the generation algorithm

pub mod stopwords;
pub mod suggestion;

/// Error type for stop-word list loading.
#[derive(Debug, thiserror::Error)]
pub enum FraasiError {
    #[error("failed to read stop-word list: {0}")]
    Io(#[from] std::io::Error),
}

pub use stopwords::StopWordSet;
pub use suggestion::{SuggestionBuilder, SuggestionGenerator};
