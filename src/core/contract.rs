use crate::types::{StatisticsError, WordCount};

/// Maximum number of characters kept from an added word
pub const MAX_WORD_LENGTH: usize = 10;

/// Frequency dictionary of added words.
///
/// Words are compared case-insensitively after being cut to their first
/// [`MAX_WORD_LENGTH`] characters. Absent words are rejected, empty and
/// whitespace-only words are ignored.
pub trait WordStatistics {
    /// Count one occurrence of `word`
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError>;

    /// Snapshot of every counted word, by count descending then word ascending
    fn statistics(&self) -> Vec<WordCount>;
}

/// Zero-argument constructor of a fresh implementation
pub type Factory = fn() -> Box<dyn WordStatistics>;
