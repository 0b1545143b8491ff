use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// The contract dimension a mutant gets wrong
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DeviationClass {
    /// Words longer than ten characters are cut at the wrong place (or not at all)
    Truncation,
    /// Absent, empty or blank words are handled wrongly
    Emptiness,
    /// Upper and lower case forms are not merged
    CaseFolding,
    /// The snapshot is returned in the wrong order
    Ordering,
    /// Counts are kept in a structure that merges, leaks or crawls
    Storage,
    /// Reads mutate or freeze the state
    Caching,
}

impl DeviationClass {
    pub fn summary(&self) -> &'static str {
        match self {
            DeviationClass::Truncation => "wrong truncation boundary",
            DeviationClass::Emptiness => "wrong absent/blank handling",
            DeviationClass::CaseFolding => "wrong case folding",
            DeviationClass::Ordering => "wrong sort order",
            DeviationClass::Storage => "wrong aggregation structure",
            DeviationClass::Caching => "stale or destructive reads",
        }
    }
}
