//! Mutants that cut words at the wrong boundary.

use std::collections::HashMap;

use crate::implementations::text::{char_len, is_blank, sorted_snapshot, take_chars};
use crate::types::{StatisticsError, WordCount};
use crate::{MAX_WORD_LENGTH, WordStatistics};

/// Takes the first ten characters of every word, whatever its length
#[derive(Debug, Default)]
pub struct AlwaysTruncate {
    stats: HashMap<String, usize>,
}

impl WordStatistics for AlwaysTruncate {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let chars: Vec<char> = word.chars().collect();
        // Slicing past the end panics on short words
        let key = chars[..MAX_WORD_LENGTH]
            .iter()
            .collect::<String>()
            .to_lowercase();
        *self.stats.entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Keeps words at full length
#[derive(Debug, Default)]
pub struct NeverTruncate {
    stats: HashMap<String, usize>,
}

impl WordStatistics for NeverTruncate {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        *self.stats.entry(word.to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Drops the last two characters of words between six and ten characters long
#[derive(Debug, Default)]
pub struct ShortenMidLength {
    stats: HashMap<String, usize>,
}

impl WordStatistics for ShortenMidLength {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let len = char_len(word);
        let word = if len > MAX_WORD_LENGTH {
            take_chars(word, MAX_WORD_LENGTH)
        } else if len > 5 {
            take_chars(word, len - 2)
        } else {
            word.to_string()
        };
        *self.stats.entry(word.to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Only truncates when the length minus one exceeds the limit
#[derive(Debug, Default)]
pub struct OffByOneLength {
    stats: HashMap<String, usize>,
}

impl WordStatistics for OffByOneLength {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let word = if char_len(word) - 1 > MAX_WORD_LENGTH {
            take_chars(word, MAX_WORD_LENGTH)
        } else {
            word.to_string()
        };
        *self.stats.entry(word.to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}
