use super::{
    CaseContext, CaseFailure, CaseResult, Deadline, TestCase, expect_eq, expect_len,
    expect_statistics, expect_words,
};
use crate::types::StatisticsError;

pub(super) fn all() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "statistics_is_empty_after_creation",
            run: statistics_is_empty_after_creation,
        },
        TestCase {
            name: "add_word_allows_short_words",
            run: add_word_allows_short_words,
        },
        TestCase {
            name: "add_word_counts_once_when_same_word",
            run: add_word_counts_once_when_same_word,
        },
        TestCase {
            name: "add_word_increments_counter_when_same_word",
            run: add_word_increments_counter_when_same_word,
        },
        TestCase {
            name: "statistics_sorts_words_by_frequency",
            run: statistics_sorts_words_by_frequency,
        },
        TestCase {
            name: "statistics_sorts_words_by_abc_when_frequencies_are_same",
            run: statistics_sorts_words_by_abc_when_frequencies_are_same,
        },
        TestCase {
            name: "add_word_rejects_absent_word",
            run: add_word_rejects_absent_word,
        },
        TestCase {
            name: "add_word_ignores_empty_word",
            run: add_word_ignores_empty_word,
        },
        TestCase {
            name: "add_word_ignores_whitespace_word",
            run: add_word_ignores_whitespace_word,
        },
        TestCase {
            name: "add_word_cuts_words_longer_than_10",
            run: add_word_cuts_words_longer_than_10,
        },
        TestCase {
            name: "add_word_joins_cut_words",
            run: add_word_joins_cut_words,
        },
        TestCase {
            name: "add_word_keeps_leading_whitespace_when_cutting",
            run: add_word_keeps_leading_whitespace_when_cutting,
        },
        TestCase {
            name: "add_word_is_case_insensitive",
            run: add_word_is_case_insensitive,
        },
        TestCase {
            name: "add_word_stores_words_in_lower_case",
            run: add_word_stores_words_in_lower_case,
        },
        TestCase {
            name: "add_word_has_no_collisions",
            run: add_word_has_no_collisions,
        },
        TestCase {
            name: "add_word_is_fast_on_different_words",
            run: add_word_is_fast_on_different_words,
        },
        TestCase {
            name: "add_word_is_fast_on_same_word",
            run: add_word_is_fast_on_same_word,
        },
        TestCase {
            name: "several_instances_are_supported",
            run: several_instances_are_supported,
        },
        TestCase {
            name: "statistics_supports_repeated_reads",
            run: statistics_supports_repeated_reads,
        },
        TestCase {
            name: "statistics_reflects_words_added_after_read",
            run: statistics_reflects_words_added_after_read,
        },
        TestCase {
            name: "statistics_keeps_mixed_counts_in_order",
            run: statistics_keeps_mixed_counts_in_order,
        },
    ]
}

/// Number padded with trailing spaces to exactly ten characters
fn padded_number(i: usize) -> String {
    format!("{i:<10}")
}

fn statistics_is_empty_after_creation(ctx: &CaseContext) -> CaseResult {
    let stats = ctx.create();
    expect_statistics(&stats.statistics(), &[])
}

fn add_word_allows_short_words(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("aaa"))?;
    Ok(())
}

fn add_word_counts_once_when_same_word(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("aaaaaaaaaa"))?;
    stats.add_word(Some("aaaaaaaaaa"))?;
    expect_len(&stats.statistics(), 1)
}

fn add_word_increments_counter_when_same_word(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("aaaaaaaaaa"))?;
    stats.add_word(Some("aaaaaaaaaa"))?;
    let counts: Vec<usize> = stats.statistics().iter().map(|row| row.count).collect();
    expect_eq(counts, vec![2], "counts")
}

fn statistics_sorts_words_by_frequency(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("aaaaaaaaaa"))?;
    stats.add_word(Some("bbbbbbbbbb"))?;
    stats.add_word(Some("bbbbbbbbbb"))?;
    expect_statistics(
        &stats.statistics(),
        &[("bbbbbbbbbb", 2), ("aaaaaaaaaa", 1)],
    )
}

fn statistics_sorts_words_by_abc_when_frequencies_are_same(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("cccccccccc"))?;
    stats.add_word(Some("aaaaaaaaaa"))?;
    stats.add_word(Some("bbbbbbbbbb"))?;
    expect_words(
        &stats.statistics(),
        &["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"],
    )
}

fn add_word_rejects_absent_word(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    match stats.add_word(None) {
        Err(StatisticsError::InvalidArgument) => expect_statistics(&stats.statistics(), &[]),
        Ok(()) => Err(CaseFailure::Assertion(
            "absent word was accepted, expected InvalidArgument".to_string(),
        )),
    }
}

fn add_word_ignores_empty_word(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some(""))?;
    expect_statistics(&stats.statistics(), &[])
}

fn add_word_ignores_whitespace_word(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some(" "))?;
    stats.add_word(Some(" \t\n"))?;
    expect_statistics(&stats.statistics(), &[])
}

fn add_word_cuts_words_longer_than_10(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("12345678901"))?;
    expect_words(&stats.statistics(), &["1234567890"])
}

fn add_word_joins_cut_words(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("12345678901"))?;
    stats.add_word(Some("1234567890"))?;
    expect_statistics(&stats.statistics(), &[("1234567890", 2)])
}

fn add_word_keeps_leading_whitespace_when_cutting(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("          a"))?;
    expect_statistics(&stats.statistics(), &[("          ", 1)])
}

fn add_word_is_case_insensitive(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    let mut distinct = 0;
    for letter in ('a'..='z').chain('а'..='я').chain(['ё']) {
        let word = letter.to_string();
        stats.add_word(Some(word.as_str()))?;
        stats.add_word(Some(word.to_uppercase().as_str()))?;
        distinct += 1;
    }
    expect_len(&stats.statistics(), distinct)
}

fn add_word_stores_words_in_lower_case(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("AbCdEfGhIj"))?;
    stats.add_word(Some("ЁЖИК"))?;
    expect_statistics(&stats.statistics(), &[("abcdefghij", 1), ("ёжик", 1)])
}

fn add_word_has_no_collisions(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    let total = ctx.settings.collision_words;
    for i in 0..total {
        stats.add_word(Some(i.to_string().as_str()))?;
    }
    expect_len(&stats.statistics(), total)
}

fn add_word_is_fast_on_different_words(ctx: &CaseContext) -> CaseResult {
    let words: Vec<String> = (0..ctx.settings.perf_volume).map(padded_number).collect();
    let mut stats = ctx.create();

    let deadline = Deadline::start(ctx.settings.time_budget);
    for (done, word) in words.iter().enumerate() {
        deadline.check(done)?;
        stats.add_word(Some(word.as_str()))?;
    }
    stats.statistics();
    deadline.check(words.len())
}

fn add_word_is_fast_on_same_word(ctx: &CaseContext) -> CaseResult {
    let volume = ctx.settings.perf_volume;
    let words: Vec<String> = (0..volume).map(padded_number).collect();
    let same_word = padded_number(9);
    let mut stats = ctx.create();

    let deadline = Deadline::start(ctx.settings.time_budget);
    for (done, word) in words.iter().enumerate() {
        deadline.check(done)?;
        stats.add_word(Some(word.as_str()))?;
    }
    for done in volume..volume * 2 {
        deadline.check(done)?;
        stats.add_word(Some(same_word.as_str()))?;
    }
    stats.statistics();
    deadline.check(volume * 2)
}

fn several_instances_are_supported(ctx: &CaseContext) -> CaseResult {
    let mut first = ctx.create();
    let mut second = ctx.create();
    first.add_word(Some("aaaaaaaaaa"))?;
    second.add_word(Some("bbbbbbbbbb"))?;
    expect_statistics(&first.statistics(), &[("aaaaaaaaaa", 1)])?;
    expect_statistics(&second.statistics(), &[("bbbbbbbbbb", 1)])
}

fn statistics_supports_repeated_reads(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    stats.add_word(Some("aaaaaaaaaa"))?;
    let first = stats.statistics();
    let second = stats.statistics();
    expect_statistics(&first, &[("aaaaaaaaaa", 1)])?;
    expect_eq(second, first, "second read")
}

fn statistics_reflects_words_added_after_read(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    expect_statistics(&stats.statistics(), &[])?;
    stats.add_word(Some("aaaaaaaaaa"))?;
    expect_statistics(&stats.statistics(), &[("aaaaaaaaaa", 1)])?;
    stats.add_word(Some("aaaaaaaaaa"))?;
    expect_statistics(&stats.statistics(), &[("aaaaaaaaaa", 2)])
}

fn statistics_keeps_mixed_counts_in_order(ctx: &CaseContext) -> CaseResult {
    let mut stats = ctx.create();
    for word in ["xx", "b", "YY", "xx", "a", "C", "yy", "XX", "c", "Yy"] {
        stats.add_word(Some(word))?;
    }
    expect_statistics(
        &stats.statistics(),
        &[("xx", 3), ("yy", 3), ("c", 2), ("a", 1), ("b", 1)],
    )
}
