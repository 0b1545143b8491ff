use std::collections::HashMap;

use strum::IntoEnumIterator;

use wordstats::implementations::{MutantId, catalog};
use wordstats::types::{AppError, DeviationClass, StatisticsError, WordCount};
use wordstats::core::suite::CaseContext;
use wordstats::{Factory, Harness, ImplementationRegistry, Suite, SuiteRunner, WordStatistics};

/// The case expected to expose each mutant; others may fail as well
fn killing_case(id: MutantId) -> &'static str {
    match id {
        MutantId::AlwaysTruncate => "add_word_allows_short_words",
        MutantId::NeverTruncate => "add_word_cuts_words_longer_than_10",
        MutantId::ShortenMidLength => "statistics_sorts_words_by_frequency",
        MutantId::OffByOneLength => "add_word_cuts_words_longer_than_10",
        MutantId::OriginalCaseKey => "add_word_stores_words_in_lower_case",
        MutantId::LostIncrement => "add_word_increments_counter_when_same_word",
        MutantId::BlankIsInvalid => "add_word_ignores_empty_word",
        MutantId::AbsentIsIgnored => "add_word_rejects_absent_word",
        MutantId::TruncateBeforeBlankCheck => "add_word_keeps_leading_whitespace_when_cutting",
        MutantId::AbsentPanics => "add_word_rejects_absent_word",
        MutantId::AlphabeticalOnly => "statistics_sorts_words_by_frequency",
        MutantId::CountWithoutTieBreak => {
            "statistics_sorts_words_by_abc_when_frequencies_are_same"
        }
        MutantId::CountAscending => "statistics_sorts_words_by_frequency",
        MutantId::ResortedByWord => "statistics_sorts_words_by_frequency",
        MutantId::PairDescending => "statistics_sorts_words_by_abc_when_frequencies_are_same",
        MutantId::EmptyOnlyCheck => "add_word_ignores_whitespace_word",
        MutantId::SharedStatistics => "several_instances_are_supported",
        MutantId::HashBuckets => "add_word_has_no_collisions",
        MutantId::KeyboardTableFold => "add_word_is_case_insensitive",
        MutantId::NegativeSortedList => "add_word_is_fast_on_different_words",
        MutantId::LinearScanList => "add_word_is_fast_on_same_word",
        MutantId::DrainingRead => "statistics_supports_repeated_reads",
        MutantId::FrozenFirstRead => "statistics_reflects_words_added_after_read",
    }
}

#[test]
fn every_mutant_fails_its_killing_case() {
    let suite = Suite::default();
    let runner = SuiteRunner::new(&suite);
    for id in MutantId::iter() {
        let outcome = runner.run(id.slug(), id.factory());
        let failed = outcome.failed_cases();
        assert!(
            failed.contains(&killing_case(id)),
            "{} expected to fail {}, failed {:?}",
            id,
            killing_case(id),
            failed
        );
    }
}

#[test]
fn full_catalog_is_caught() {
    let harness = Harness::new(Suite::default(), catalog::registry());
    let report = harness.verify().expect("every mutant should be caught");
    assert_eq!(report.mutants.len(), MutantId::iter().count());
    assert_eq!(report.caught_count(), report.mutants.len());
    assert!(report.reference.all_passed());
    assert_eq!(report.percent_caught(), 100.0);

    let stats = report.class_stats();
    for class in DeviationClass::iter() {
        assert_eq!(stats.catch_rate(class), Some(100.0), "{class}");
    }
}

#[test]
fn identical_implementation_survives() {
    let mut registry = ImplementationRegistry::new();
    registry.register(
        "twin",
        "the reference under another name",
        DeviationClass::Ordering,
        wordstats::implementations::ReferenceStatistics::boxed,
    );
    let harness = Harness::new(Suite::default(), registry);

    let report = harness.run().unwrap();
    assert_eq!(report.survivor_ids(), vec!["twin".to_string()]);

    match harness.verify() {
        Err(AppError::SurvivingMutants(ids)) => assert_eq!(ids, vec!["twin".to_string()]),
        other => panic!("expected surviving mutants, got {other:?}"),
    }
}

/// Accepts absent words, so the suite disagrees with it
#[derive(Default)]
struct Lenient {
    words: Vec<WordCount>,
}

impl WordStatistics for Lenient {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        if let Some(word) = word
            && !word.trim().is_empty()
        {
            let key: String = word.chars().take(10).collect::<String>().to_lowercase();
            match self.words.iter_mut().find(|row| row.word == key) {
                Some(row) => row.count += 1,
                None => self.words.push(WordCount::new(key, 1)),
            }
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut rows = self.words.clone();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        rows
    }
}

fn lenient() -> Box<dyn WordStatistics> {
    Box::new(Lenient::default())
}

#[test]
fn suite_failing_the_reference_is_rejected_before_mutants_run() {
    let harness = Harness::new(Suite::default(), catalog::registry()).with_reference(lenient);
    match harness.run() {
        Err(AppError::InvalidSuite(cases)) => {
            assert!(cases.contains(&"add_word_rejects_absent_word".to_string()));
        }
        other => panic!("expected an invalid suite, got {other:?}"),
    }
}

#[test]
fn unknown_mutant_names_are_reported() {
    let mut registry = catalog::registry();
    let err = registry
        .retain_names(&["L".to_string(), "L9".to_string()])
        .unwrap_err();
    assert_eq!(err, "L9");
}

fn snapshot(stats: &HashMap<String, usize>) -> Vec<WordCount> {
    let mut rows: Vec<WordCount> = stats
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    rows
}

/// Correct except that one-character words keep their case
#[derive(Default)]
struct FoldsOnlyLongWords {
    stats: HashMap<String, usize>,
}

impl WordStatistics for FoldsOnlyLongWords {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let cut: String = word.chars().take(10).collect();
        let key = if cut.chars().count() > 1 {
            cut.to_lowercase()
        } else {
            cut
        };
        *self.stats.entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        snapshot(&self.stats)
    }
}

/// Correct except that short numbers of equal length share one entry
#[derive(Default)]
struct MergesShortNumbers {
    stats: HashMap<String, usize>,
}

impl WordStatistics for MergesShortNumbers {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatisticsError> {
        let word = word.ok_or(StatisticsError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let key = if word.len() < 4 && word.chars().all(|c| c.is_ascii_digit()) {
            format!("#{}", word.len())
        } else {
            word.chars().take(10).collect::<String>().to_lowercase()
        };
        *self.stats.entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        snapshot(&self.stats)
    }
}

fn failed_cases_of(factory: Factory) -> Vec<&'static str> {
    let suite = Suite::default();
    suite
        .cases()
        .iter()
        .filter(|case| {
            let ctx = CaseContext::new(factory, suite.settings().clone());
            SuiteRunner::run_case(case, &ctx).is_failed()
        })
        .map(|case| case.name)
        .collect()
}

fn folds_only_long_words() -> Box<dyn WordStatistics> {
    Box::new(FoldsOnlyLongWords::default())
}

fn merges_short_numbers() -> Box<dyn WordStatistics> {
    Box::new(MergesShortNumbers::default())
}

#[test]
fn case_folding_is_checked_on_single_letters() {
    let failed = failed_cases_of(folds_only_long_words);
    assert!(failed.contains(&"add_word_is_case_insensitive"), "{failed:?}");
    assert!(!failed.contains(&"add_word_stores_words_in_lower_case"), "{failed:?}");
}

#[test]
fn collisions_are_checked_on_short_numbers() {
    let failed = failed_cases_of(merges_short_numbers);
    assert_eq!(failed, vec!["add_word_has_no_collisions"]);
}

#[test]
fn lost_increment_reports_zero_counts() {
    let mut stats = (MutantId::LostIncrement.factory())();
    stats.add_word(Some("Word")).unwrap();
    stats.add_word(Some("word")).unwrap();
    assert_eq!(stats.statistics(), vec![WordCount::new("Word", 0)]);
}
