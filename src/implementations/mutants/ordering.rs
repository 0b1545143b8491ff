//! Mutants that count correctly but report in the wrong order.

use std::collections::HashMap;

use crate::WordStatistics;
use crate::implementations::text::{normalize, sorted_snapshot};
use crate::types::{StatisticsError, WordCount};

fn count_into(stats: &mut HashMap<String, usize>, word: Option<&str>) -> Result<(), StatisticsError> {
    let word = word.ok_or(StatisticsError::InvalidArgument)?;
    if let Some(key) = normalize(word) {
        *stats.entry(key).or_insert(0) += 1;
    }
    Ok(())
}

fn unordered(stats: &HashMap<String, usize>) -> Vec<WordCount> {
    stats
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), *count))
        .collect()
}

/// Orders by word only
#[derive(Debug, Default)]
pub struct AlphabeticalOnly {
    stats: HashMap<String, usize>,
}

impl WordStatistics for AlphabeticalOnly {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        count_into(&mut self.stats, word)
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = unordered(&self.stats);
        snapshot.sort_by(|left, right| left.word.cmp(&right.word));
        snapshot
    }
}

/// Orders by count descending, ties stay in first-seen order
#[derive(Debug, Default)]
pub struct CountWithoutTieBreak {
    entries: Vec<WordCount>,
    positions: HashMap<String, usize>,
}

impl WordStatistics for CountWithoutTieBreak {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        let Some(key) = normalize(word) else {
            return Ok(());
        };
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push(WordCount::new(key, 1));
            }
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by(|left, right| right.count.cmp(&left.count));
        snapshot
    }
}

/// Orders by count ascending
#[derive(Debug, Default)]
pub struct CountAscending {
    stats: HashMap<String, usize>,
}

impl WordStatistics for CountAscending {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        count_into(&mut self.stats, word)
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = unordered(&self.stats);
        snapshot.sort_by_key(|entry| entry.count);
        snapshot
    }
}

/// Sorts correctly, then sorts the result again by word
#[derive(Debug, Default)]
pub struct ResortedByWord {
    stats: HashMap<String, usize>,
}

impl WordStatistics for ResortedByWord {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        count_into(&mut self.stats, word)
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = sorted_snapshot(&self.stats);
        snapshot.sort_by(|left, right| left.word.cmp(&right.word));
        snapshot
    }
}

/// Sorts by the whole (count, word) pair descending
#[derive(Debug, Default)]
pub struct PairDescending {
    stats: HashMap<String, usize>,
}

impl WordStatistics for PairDescending {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        count_into(&mut self.stats, word)
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut snapshot = unordered(&self.stats);
        snapshot.sort_by(|left, right| (right.count, &right.word).cmp(&(left.count, &left.word)));
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill(stats: &mut dyn WordStatistics) {
        for word in ["cc", "aa", "bb", "bb"] {
            stats.add_word(Some(word)).unwrap();
        }
    }

    fn words(stats: &dyn WordStatistics) -> Vec<String> {
        stats.statistics().into_iter().map(|e| e.word).collect()
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut stats = CountWithoutTieBreak::default();
        fill(&mut stats);
        assert_eq!(words(&stats), vec!["bb", "cc", "aa"]);
    }

    #[test]
    fn pair_descending_reverses_ties() {
        let mut stats = PairDescending::default();
        fill(&mut stats);
        assert_eq!(words(&stats), vec!["bb", "cc", "aa"]);
    }

    #[test]
    fn resorted_by_word_ignores_counts() {
        let mut stats = ResortedByWord::default();
        fill(&mut stats);
        assert_eq!(words(&stats), vec!["aa", "bb", "cc"]);
    }
}
