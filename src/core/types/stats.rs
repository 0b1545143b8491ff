use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{DeviationClass, MutantReport};

/// Catch statistics grouped by deviation class
#[derive(Debug, Default, Serialize)]
pub struct DeviationStats {
    /// Map from deviation class to (eligible_count, caught_count)
    pub by_class: BTreeMap<DeviationClass, (usize, usize)>,
}

impl DeviationStats {
    pub fn from_reports(reports: &[MutantReport]) -> Self {
        let mut stats = Self::default();
        for report in reports {
            stats.record(report.class, report.is_caught());
        }
        stats
    }

    pub fn record(&mut self, class: DeviationClass, caught: bool) {
        let entry = self.by_class.entry(class).or_insert((0, 0));
        entry.0 += 1;
        if caught {
            entry.1 += 1;
        }
    }

    pub fn catch_rate(&self, class: DeviationClass) -> Option<f64> {
        self.by_class.get(&class).and_then(|(eligible, caught)| {
            if *eligible > 0 {
                Some((*caught as f64 / *eligible as f64) * 100.0)
            } else {
                None
            }
        })
    }
}
