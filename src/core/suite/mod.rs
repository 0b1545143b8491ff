//! The fixed behavioral suite every implementation is measured against.
//!
//! Cases never name a concrete implementation: they build their subjects
//! through the [`CaseContext`], so the same list can be rebound to any
//! [`Factory`].

use std::fmt::Debug;
use std::time::{Duration, Instant};

use similar::TextDiff;
use thiserror::Error;

mod cases;

use crate::types::config::SuiteConfig;
use crate::types::{StatisticsError, WordCount};
use crate::{Factory, WordStatistics};

#[derive(Debug, Error)]
pub enum CaseFailure {
    #[error("{0}")]
    Assertion(String),
    #[error("add_word returned an unexpected error: {0}")]
    Unexpected(#[from] StatisticsError),
    #[error("time budget of {budget_ms}ms exhausted after {done} operations")]
    OverBudget { budget_ms: u128, done: usize },
    #[error("panicked: {0}")]
    Panicked(String),
}

pub type CaseResult = Result<(), CaseFailure>;

/// Knobs shared by every case of one suite
#[derive(Debug, Clone)]
pub struct SuiteSettings {
    pub time_budget: Duration,
    pub perf_volume: usize,
    pub collision_words: usize,
}

impl SuiteSettings {
    pub fn from_config(config: &SuiteConfig) -> Self {
        Self {
            time_budget: Duration::from_millis(config.time_budget_ms()),
            perf_volume: config.perf_volume(),
            collision_words: config.collision_words(),
        }
    }
}

impl Default for SuiteSettings {
    fn default() -> Self {
        Self::from_config(&SuiteConfig::default())
    }
}

/// What a case gets to work with: a way to build subjects, and the settings
pub struct CaseContext {
    factory: Factory,
    pub settings: SuiteSettings,
}

impl CaseContext {
    pub fn new(factory: Factory, settings: SuiteSettings) -> Self {
        Self { factory, settings }
    }

    /// A fresh, independent subject
    pub fn create(&self) -> Box<dyn WordStatistics> {
        (self.factory)()
    }
}

#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub run: fn(&CaseContext) -> CaseResult,
}

/// Ordered list of cases plus the settings they run with
pub struct Suite {
    cases: Vec<TestCase>,
    settings: SuiteSettings,
}

impl Suite {
    pub fn new(settings: SuiteSettings) -> Self {
        Self {
            cases: cases::all(),
            settings,
        }
    }

    pub fn from_config(config: &SuiteConfig) -> Self {
        Self::new(SuiteSettings::from_config(config))
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn case(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|case| case.name == name)
    }

    pub fn case_names(&self) -> Vec<&'static str> {
        self.cases.iter().map(|case| case.name).collect()
    }

    pub fn settings(&self) -> &SuiteSettings {
        &self.settings
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new(SuiteSettings::default())
    }
}

/// Wall-clock ceiling for the timing cases
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn check(&self, done: usize) -> CaseResult {
        if self.started.elapsed() > self.budget {
            return Err(CaseFailure::OverBudget {
                budget_ms: self.budget.as_millis(),
                done,
            });
        }
        Ok(())
    }
}

pub fn expect_eq<T: PartialEq + Debug>(actual: T, expected: T, what: &str) -> CaseResult {
    if actual == expected {
        Ok(())
    } else {
        Err(CaseFailure::Assertion(format!(
            "{what}: expected {expected:?}, got {actual:?}"
        )))
    }
}

pub fn expect_len(actual: &[WordCount], expected: usize) -> CaseResult {
    expect_eq(actual.len(), expected, "number of distinct words")
}

pub fn expect_statistics(actual: &[WordCount], expected: &[(&str, usize)]) -> CaseResult {
    let expected: Vec<WordCount> = expected.iter().map(|&pair| pair.into()).collect();
    if actual == expected.as_slice() {
        return Ok(());
    }
    let render = |rows: &[WordCount]| {
        rows.iter()
            .map(|row| format!("{row}\n"))
            .collect::<String>()
    };
    let (expected_text, actual_text) = (render(&expected), render(actual));
    let diff = TextDiff::from_lines(&expected_text, &actual_text);
    Err(CaseFailure::Assertion(format!(
        "statistics differ\n{}",
        diff.unified_diff().header("expected", "actual")
    )))
}

pub fn expect_words(actual: &[WordCount], expected: &[&str]) -> CaseResult {
    let words: Vec<&str> = actual.iter().map(|row| row.word.as_str()).collect();
    expect_eq(words.as_slice(), expected, "words")
}
