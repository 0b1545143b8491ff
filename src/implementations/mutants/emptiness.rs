//! Mutants that mishandle absent, empty and blank words.

use std::collections::HashMap;

use crate::WordStatistics;
use crate::implementations::text::{is_blank, sorted_snapshot, truncate};
use crate::types::{StatisticsError, WordCount};

/// Rejects blank words as if they were absent
#[derive(Debug, Default)]
pub struct BlankIsInvalid {
    stats: HashMap<String, usize>,
}

impl WordStatistics for BlankIsInvalid {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = match word {
            Some(word) if !is_blank(word) => word,
            _ => return Err(StatisticsError::InvalidArgument),
        };
        *self.stats.entry(truncate(word).to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Silently ignores absent words
#[derive(Debug, Default)]
pub struct AbsentIsIgnored {
    stats: HashMap<String, usize>,
}

impl WordStatistics for AbsentIsIgnored {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let Some(word) = word else {
            return Ok(());
        };
        if is_blank(word) {
            return Ok(());
        }
        *self.stats.entry(truncate(word).to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Cuts the word before deciding whether it is blank
#[derive(Debug, Default)]
pub struct TruncateBeforeBlankCheck {
    stats: HashMap<String, usize>,
}

impl WordStatistics for TruncateBeforeBlankCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        let word = truncate(word);
        if is_blank(&word) {
            return Ok(());
        }
        *self.stats.entry(word.to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Never checks for absence and crashes instead of reporting it
#[derive(Debug, Default)]
pub struct AbsentPanics {
    stats: HashMap<String, usize>,
}

impl WordStatistics for AbsentPanics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let Some(word) = word else {
            panic!("add_word dereferenced an absent word");
        };
        if word.is_empty() || word.chars().all(char::is_whitespace) {
            return Ok(());
        }
        *self.stats.entry(truncate(word).to_lowercase()).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

/// Treats only the empty string as ignorable, whitespace gets counted
#[derive(Debug, Default)]
pub struct EmptyOnlyCheck {
    stats: HashMap<String, usize>,
}

impl WordStatistics for EmptyOnlyCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if word.is_empty() {
            return Ok(());
        }
        let word = truncate(word).to_lowercase();
        *self.stats.entry(word).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}
