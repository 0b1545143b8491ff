use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::mutants::caching::{DrainingRead, FrozenFirstRead};
use super::mutants::case_folding::{KeyboardTableFold, OriginalCaseKey};
use super::mutants::emptiness::{
    AbsentIsIgnored, AbsentPanics, BlankIsInvalid, EmptyOnlyCheck, TruncateBeforeBlankCheck,
};
use super::mutants::ordering::{
    AlphabeticalOnly, CountAscending, CountWithoutTieBreak, PairDescending, ResortedByWord,
};
use super::mutants::storage::{
    HashBuckets, LinearScanList, LostIncrement, NegativeSortedList, SharedStatistics,
};
use super::mutants::truncation::{AlwaysTruncate, NeverTruncate, OffByOneLength, ShortenMidLength};
use crate::types::DeviationClass;
use crate::{Factory, ImplementationRegistry, WordStatistics};

/// Every known-incorrect implementation, keyed by its short slug
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum MutantId {
    #[strum(to_string = "L")]
    AlwaysTruncate,
    #[strum(to_string = "L2")]
    NeverTruncate,
    #[strum(to_string = "L3")]
    ShortenMidLength,
    #[strum(to_string = "L4")]
    OffByOneLength,
    #[strum(to_string = "C")]
    OriginalCaseKey,
    #[strum(to_string = "C2")]
    LostIncrement,
    #[strum(to_string = "E")]
    BlankIsInvalid,
    #[strum(to_string = "E2")]
    AbsentIsIgnored,
    #[strum(to_string = "E3")]
    TruncateBeforeBlankCheck,
    #[strum(to_string = "E4")]
    AbsentPanics,
    #[strum(to_string = "O1")]
    AlphabeticalOnly,
    #[strum(to_string = "O2")]
    CountWithoutTieBreak,
    #[strum(to_string = "O3")]
    CountAscending,
    #[strum(to_string = "O4")]
    ResortedByWord,
    #[strum(to_string = "O5")]
    PairDescending,
    #[strum(to_string = "CR")]
    EmptyOnlyCheck,
    #[strum(to_string = "STA")]
    SharedStatistics,
    #[strum(to_string = "123")]
    HashBuckets,
    #[strum(to_string = "QWE")]
    KeyboardTableFold,
    #[strum(to_string = "998")]
    NegativeSortedList,
    #[strum(to_string = "999")]
    LinearScanList,
    #[strum(to_string = "EN")]
    DrainingRead,
    #[strum(to_string = "EN2")]
    FrozenFirstRead,
}

fn boxed<T: WordStatistics + Default + 'static>() -> Box<dyn WordStatistics> {
    Box::new(T::default())
}

impl MutantId {
    pub fn slug(&self) -> &'static str {
        self.into()
    }

    pub fn class(&self) -> DeviationClass {
        match self {
            MutantId::AlwaysTruncate
            | MutantId::NeverTruncate
            | MutantId::ShortenMidLength
            | MutantId::OffByOneLength => DeviationClass::Truncation,
            MutantId::BlankIsInvalid
            | MutantId::AbsentIsIgnored
            | MutantId::TruncateBeforeBlankCheck
            | MutantId::AbsentPanics
            | MutantId::EmptyOnlyCheck => DeviationClass::Emptiness,
            MutantId::OriginalCaseKey | MutantId::KeyboardTableFold => DeviationClass::CaseFolding,
            MutantId::AlphabeticalOnly
            | MutantId::CountWithoutTieBreak
            | MutantId::CountAscending
            | MutantId::ResortedByWord
            | MutantId::PairDescending => DeviationClass::Ordering,
            MutantId::LostIncrement
            | MutantId::SharedStatistics
            | MutantId::HashBuckets
            | MutantId::NegativeSortedList
            | MutantId::LinearScanList => DeviationClass::Storage,
            MutantId::DrainingRead | MutantId::FrozenFirstRead => DeviationClass::Caching,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MutantId::AlwaysTruncate => "takes the first ten characters of every word",
            MutantId::NeverTruncate => "never truncates long words",
            MutantId::ShortenMidLength => "drops the last two characters of 6-10 character words",
            MutantId::OffByOneLength => "truncates only words longer than eleven characters",
            MutantId::OriginalCaseKey => "stores words under their original case",
            MutantId::LostIncrement => "computes the incremented count but never stores it",
            MutantId::BlankIsInvalid => "rejects blank words as absent",
            MutantId::AbsentIsIgnored => "silently ignores absent words",
            MutantId::TruncateBeforeBlankCheck => "truncates before the blank check",
            MutantId::AbsentPanics => "crashes on absent words",
            MutantId::AlphabeticalOnly => "orders by word only",
            MutantId::CountWithoutTieBreak => "orders by count without a tie-break",
            MutantId::CountAscending => "orders by count ascending",
            MutantId::ResortedByWord => "re-sorts the result by word",
            MutantId::PairDescending => "breaks ties in reverse alphabetical order",
            MutantId::EmptyOnlyCheck => "counts whitespace-only words",
            MutantId::SharedStatistics => "shares one state between all instances",
            MutantId::HashBuckets => "merges words whose hashes collide in a fixed table",
            MutantId::KeyboardTableFold => "lowercases with an incomplete alphabet table",
            MutantId::NegativeSortedList => "re-sorts a list of negated counters on every insert",
            MutantId::LinearScanList => "scans a list for every repeated word",
            MutantId::DrainingRead => "empties the state on every read",
            MutantId::FrozenFirstRead => "caches the first read forever",
        }
    }

    pub fn factory(&self) -> Factory {
        match self {
            MutantId::AlwaysTruncate => boxed::<AlwaysTruncate>,
            MutantId::NeverTruncate => boxed::<NeverTruncate>,
            MutantId::ShortenMidLength => boxed::<ShortenMidLength>,
            MutantId::OffByOneLength => boxed::<OffByOneLength>,
            MutantId::OriginalCaseKey => boxed::<OriginalCaseKey>,
            MutantId::LostIncrement => boxed::<LostIncrement>,
            MutantId::BlankIsInvalid => boxed::<BlankIsInvalid>,
            MutantId::AbsentIsIgnored => boxed::<AbsentIsIgnored>,
            MutantId::TruncateBeforeBlankCheck => boxed::<TruncateBeforeBlankCheck>,
            MutantId::AbsentPanics => boxed::<AbsentPanics>,
            MutantId::AlphabeticalOnly => boxed::<AlphabeticalOnly>,
            MutantId::CountWithoutTieBreak => boxed::<CountWithoutTieBreak>,
            MutantId::CountAscending => boxed::<CountAscending>,
            MutantId::ResortedByWord => boxed::<ResortedByWord>,
            MutantId::PairDescending => boxed::<PairDescending>,
            MutantId::EmptyOnlyCheck => boxed::<EmptyOnlyCheck>,
            MutantId::SharedStatistics => boxed::<SharedStatistics>,
            MutantId::HashBuckets => boxed::<HashBuckets>,
            MutantId::KeyboardTableFold => boxed::<KeyboardTableFold>,
            MutantId::NegativeSortedList => boxed::<NegativeSortedList>,
            MutantId::LinearScanList => boxed::<LinearScanList>,
            MutantId::DrainingRead => boxed::<DrainingRead>,
            MutantId::FrozenFirstRead => boxed::<FrozenFirstRead>,
        }
    }
}

/// Register the whole catalog, in declaration order
pub fn register_all(registry: &mut ImplementationRegistry) {
    for id in MutantId::iter() {
        registry.register(id.slug(), id.description(), id.class(), id.factory());
    }
}

/// Registry holding exactly the catalog
pub fn registry() -> ImplementationRegistry {
    let mut registry = ImplementationRegistry::new();
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn slugs_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for id in MutantId::iter() {
            assert!(seen.insert(id.slug()), "duplicate slug {}", id.slug());
            assert_eq!(MutantId::from_str(id.slug()).unwrap(), id);
            assert_eq!(id.to_string(), id.slug());
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn slugs_parse_case_insensitively() {
        assert_eq!(MutantId::from_str("qwe").unwrap(), MutantId::KeyboardTableFold);
        assert_eq!(MutantId::from_str("en2").unwrap(), MutantId::FrozenFirstRead);
        assert_eq!(MutantId::from_str("c2").unwrap(), MutantId::LostIncrement);
        assert!(MutantId::from_str("nope").is_err());
    }

    #[test]
    fn every_factory_builds_a_fresh_empty_instance() {
        for id in MutantId::iter() {
            let stats = (id.factory())();
            assert!(stats.statistics().is_empty(), "{} starts non-empty", id);
        }
    }
}
