use std::cmp::Ordering;
use std::collections::HashMap;

use crate::MAX_WORD_LENGTH;
use crate::types::WordCount;

/// Check if a word carries nothing but whitespace (or nothing at all)
pub fn is_blank(word: &str) -> bool {
    word.chars().all(char::is_whitespace)
}

/// Length of a word in characters
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// First `n` characters of a word, or the whole word if shorter
pub fn take_chars(word: &str, n: usize) -> String {
    word.chars().take(n).collect()
}

/// Cut a word to the maximum stored length
pub fn truncate(word: &str) -> String {
    if char_len(word) > MAX_WORD_LENGTH {
        take_chars(word, MAX_WORD_LENGTH)
    } else {
        word.to_string()
    }
}

/// Cut and lowercase a word into its aggregation key, or `None` for blank words
pub fn normalize(word: &str) -> Option<String> {
    if is_blank(word) {
        None
    } else {
        Some(truncate(word).to_lowercase())
    }
}

/// Count descending, then word ascending
pub fn by_count_then_word(left: &WordCount, right: &WordCount) -> Ordering {
    right
        .count
        .cmp(&left.count)
        .then_with(|| left.word.cmp(&right.word))
}

/// Snapshot a keyed map in canonical order
pub fn sorted_snapshot(stats: &HashMap<String, usize>) -> Vec<WordCount> {
    let mut snapshot: Vec<WordCount> = stats
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), *count))
        .collect();
    snapshot.sort_by(by_count_then_word);
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ёёёёёёёёёёё"), "ёёёёёёёёёё");
        assert_eq!(truncate("12345678901"), "1234567890");
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn blank_words() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }
}
