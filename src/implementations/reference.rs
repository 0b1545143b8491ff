use std::collections::HashMap;

use super::text::{is_blank, sorted_snapshot, truncate};
use crate::WordStatistics;
use crate::types::{StatisticsError, WordCount};

/// The implementation the shared suite is written against
#[derive(Debug, Default)]
pub struct ReferenceStatistics {
    stats: HashMap<String, usize>,
}

impl ReferenceStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn WordStatistics> {
        Box::new(Self::new())
    }
}

impl WordStatistics for ReferenceStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let key = truncate(word).to_lowercase();
        *self.stats.entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_truncated_and_folded_words_together() {
        let mut stats = ReferenceStatistics::new();
        stats.add_word(Some("12345678901")).unwrap();
        stats.add_word(Some("1234567890")).unwrap();
        stats.add_word(Some("ПРИВЕТ")).unwrap();
        stats.add_word(Some("привет")).unwrap();
        stats.add_word(Some("Zebra")).unwrap();
        assert_eq!(
            stats.statistics(),
            vec![
                WordCount::new("1234567890", 2),
                WordCount::new("привет", 2),
                WordCount::new("zebra", 1),
            ]
        );
    }

    #[test]
    fn rejects_absent_and_ignores_blank() {
        let mut stats = ReferenceStatistics::new();
        assert_eq!(stats.add_word(None), Err(StatisticsError::InvalidArgument));
        stats.add_word(Some("")).unwrap();
        stats.add_word(Some("   ")).unwrap();
        assert!(stats.statistics().is_empty());
    }
}
