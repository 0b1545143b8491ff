//! Mutants whose reads change or freeze what later reads see.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;

use crate::WordStatistics;
use crate::implementations::text::{normalize, sorted_snapshot};
use crate::types::{StatisticsError, WordCount};

/// Hands the counted words out once and starts over
#[derive(Debug, Default)]
pub struct DrainingRead {
    stats: RefCell<HashMap<String, usize>>,
}

impl WordStatistics for DrainingRead {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if let Some(key) = normalize(word) {
            *self.stats.get_mut().entry(key).or_insert(0) += 1;
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let drained = self.stats.take();
        sorted_snapshot(&drained)
    }
}

/// Remembers the first snapshot forever
#[derive(Debug, Default)]
pub struct FrozenFirstRead {
    stats: HashMap<String, usize>,
    snapshot: OnceCell<Vec<WordCount>>,
}

impl WordStatistics for FrozenFirstRead {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if let Some(key) = normalize(word) {
            *self.stats.entry(key).or_insert(0) += 1;
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        self.snapshot
            .get_or_init(|| sorted_snapshot(&self.stats))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_read_is_empty_after_drain() {
        let mut stats = DrainingRead::default();
        stats.add_word(Some("a")).unwrap();
        assert_eq!(stats.statistics().len(), 1);
        assert!(stats.statistics().is_empty());
    }

    #[test]
    fn first_read_sticks() {
        let mut stats = FrozenFirstRead::default();
        assert!(stats.statistics().is_empty());
        stats.add_word(Some("a")).unwrap();
        assert!(stats.statistics().is_empty());
    }
}
