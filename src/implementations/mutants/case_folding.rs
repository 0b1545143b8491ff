//! Mutants with broken case folding.

use std::collections::HashMap;

use crate::WordStatistics;
use crate::implementations::text::{is_blank, sorted_snapshot, truncate};
use crate::types::{StatisticsError, WordCount};

/// Looks the lowered word up but stores it under its original case
#[derive(Debug, Default)]
pub struct OriginalCaseKey {
    stats: HashMap<String, usize>,
}

impl WordStatistics for OriginalCaseKey {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let word = truncate(word);
        if !self.stats.contains_key(&word.to_lowercase()) {
            self.stats.insert(word.clone(), 0);
        }
        // Indexing panics when only the lowered form is present
        let count = self.stats[&word] + 1;
        self.stats.insert(word, count);
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

const LATIN_UPPER: &str = "QWERTYUIOPLJKHGFDSAZXCVBNM";
const CYRILLIC_UPPER: &str = "ЙЦУКЕНГШЩЗФЫВАПРОЛДЯЧСМИТЬ";

/// Lowers letters by offset, using keyboard-row tables that miss some letters
#[derive(Debug, Default)]
pub struct KeyboardTableFold {
    stats: HashMap<String, usize>,
}

impl KeyboardTableFold {
    fn shift(c: char, upper: char, lower: char) -> char {
        let shifted = c as i64 - upper as i64 + lower as i64;
        u32::try_from(shifted)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(c)
    }

    fn to_lower_char(c: char) -> char {
        if LATIN_UPPER.contains(c) {
            Self::shift(c, 'D', 'd')
        } else if CYRILLIC_UPPER.contains(c) {
            Self::shift(c, 'Я', 'я')
        } else {
            c
        }
    }

    fn to_lower(word: &str) -> String {
        word.chars().map(Self::to_lower_char).collect()
    }
}

impl WordStatistics for KeyboardTableFold {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if is_blank(word) {
            return Ok(());
        }
        let word = Self::to_lower(&truncate(word));
        *self.stats.entry(word).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        sorted_snapshot(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_table_folds_latin() {
        assert_eq!(KeyboardTableFold::to_lower("HELLO"), "hello");
    }

    #[test]
    fn keyboard_table_misses_cyrillic_letters() {
        assert_eq!(KeyboardTableFold::to_lower("ПРИВЕТ"), "привет");
        assert_eq!(KeyboardTableFold::to_lower("ХЛЕБ"), "ХлеБ");
        assert_eq!(KeyboardTableFold::to_lower("Ё"), "Ё");
    }

    #[test]
    fn original_case_key_keeps_upper_case() {
        let mut stats = OriginalCaseKey::default();
        stats.add_word(Some("ABC")).unwrap();
        assert_eq!(stats.statistics(), vec![WordCount::new("ABC", 1)]);
    }
}
