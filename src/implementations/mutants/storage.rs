//! Mutants whose aggregation structure is wrong: shared, colliding or slow.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::WordStatistics;
use crate::implementations::text::{by_count_then_word, is_blank, normalize, sorted_snapshot, truncate};
use crate::types::{StatisticsError, WordCount};

thread_local! {
    static SHARED_STATS: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());
}

/// Every instance on a thread reads and writes the same map, which each
/// construction clears
#[derive(Debug)]
pub struct SharedStatistics {
    _private: (),
}

impl Default for SharedStatistics {
    fn default() -> Self {
        SHARED_STATS.with_borrow_mut(|stats| stats.clear());
        Self { _private: () }
    }
}

impl WordStatistics for SharedStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if let Some(key) = normalize(word) {
            SHARED_STATS.with_borrow_mut(|stats| *stats.entry(key).or_insert(0) += 1);
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        SHARED_STATS.with_borrow(sorted_snapshot)
    }
}

/// Creates the original-case entry at zero and drops every increment
#[derive(Debug, Default)]
pub struct LostIncrement {
    stats: HashMap<String, usize>,
}

impl WordStatistics for LostIncrement {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let word = truncate(word);
        if !self.stats.contains_key(&word.to_lowercase()) {
            self.stats.insert(word.clone(), 0);
        }
        // The bumped count is computed and never written back
        let _ = self.stats.get(&word).map(|count| count + 1);
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

const BUCKETS: usize = 12347;

/// Fixed-size open table indexed by hash, colliding words share a slot
#[derive(Debug)]
pub struct HashBuckets {
    counts: Vec<usize>,
    words: Vec<Option<String>>,
}

impl Default for HashBuckets {
    fn default() -> Self {
        Self {
            counts: vec![0; BUCKETS],
            words: vec![None; BUCKETS],
        }
    }
}

impl HashBuckets {
    fn bucket(word: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        (hasher.finish() % BUCKETS as u64) as usize
    }
}

impl WordStatistics for HashBuckets {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        let Some(key) = normalize(word) else {
            return Ok(());
        };
        let index = Self::bucket(&key);
        self.counts[index] += 1;
        self.words[index] = Some(key);
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot: Vec<WordCount> = self
            .counts
            .iter()
            .zip(&self.words)
            .filter(|(count, _)| **count > 0)
            .filter_map(|(count, word)| word.as_ref().map(|w| WordCount::new(w.clone(), *count)))
            .collect();
        snapshot.sort_by(by_count_then_word);
        snapshot
    }
}

/// Keeps negated counters in a list that is re-sorted after every insert
#[derive(Debug, Default)]
pub struct NegativeSortedList {
    stats: Vec<(i64, String)>,
}

impl WordStatistics for NegativeSortedList {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        let Some(key) = normalize(word) else {
            return Ok(());
        };
        let (count, key) = match self.stats.iter().position(|(_, w)| *w == key) {
            Some(index) => self.stats.remove(index),
            None => (0, key),
        };
        self.stats.push((count - 1, key));
        self.stats.sort();
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        self.stats
            .iter()
            .map(|(count, word)| WordCount::new(word.clone(), (-count) as usize))
            .collect()
    }
}

/// Scans a plain list to find the entry of a repeated word
#[derive(Debug, Default)]
pub struct LinearScanList {
    used_words: HashSet<String>,
    stats: Vec<WordCount>,
}

impl WordStatistics for LinearScanList {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        let Some(key) = normalize(word) else {
            return Ok(());
        };
        if self.used_words.contains(&key) {
            if let Some(index) = self.stats.iter().position(|entry| entry.word == key) {
                let entry = self.stats.remove(index);
                self.stats.push(WordCount::new(entry.word, entry.count + 1));
            }
        } else {
            self.stats.push(WordCount::new(key.clone(), 1));
            self.used_words.insert(key);
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = self.stats.clone();
        snapshot.sort_by(by_count_then_word);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expected() -> Vec<WordCount> {
        vec![WordCount::new("b", 2), WordCount::new("a", 1)]
    }

    fn fill(stats: &mut dyn WordStatistics) {
        for word in ["a", "B", "b"] {
            stats.add_word(Some(word)).unwrap();
        }
    }

    #[test]
    fn slow_lists_still_count_correctly() {
        let mut negative = NegativeSortedList::default();
        fill(&mut negative);
        assert_eq!(negative.statistics(), expected());

        let mut linear = LinearScanList::default();
        fill(&mut linear);
        assert_eq!(linear.statistics(), expected());
    }

    #[test]
    fn shared_statistics_leak_between_instances() {
        let mut first = SharedStatistics::default();
        let mut second = SharedStatistics::default();
        first.add_word(Some("a")).unwrap();
        second.add_word(Some("b")).unwrap();
        assert_eq!(first.statistics().len(), 2);
    }

    #[test]
    fn lost_increment_keeps_counts_at_zero() {
        let mut stats = LostIncrement::default();
        for word in ["a", "a", "b"] {
            stats.add_word(Some(word)).unwrap();
        }
        assert_eq!(
            stats.statistics(),
            vec![WordCount::new("a", 0), WordCount::new("b", 0)]
        );
    }

    #[test]
    fn hash_buckets_merge_colliding_words() {
        let mut stats = HashBuckets::default();
        for i in 0..1000 {
            stats.add_word(Some(format!("{i:<10}").as_str())).unwrap();
        }
        assert!(stats.statistics().len() < 1000);
    }
}
