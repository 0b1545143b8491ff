use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use crate::core::registry::RegisteredImplementation;
use crate::core::runner::SuiteRunner;
use crate::core::suite::Suite;
use crate::implementations::ReferenceStatistics;
use crate::types::{AppError, AppResult, CampaignReport, MutantReport, SuiteOutcome};
use crate::{Factory, ImplementationRegistry};

/// Checks the suite against the reference, then against every registered mutant
pub struct Harness {
    suite: Suite,
    reference: Factory,
    registry: ImplementationRegistry,
    progress: bool,
}

impl Harness {
    pub fn new(suite: Suite, registry: ImplementationRegistry) -> Self {
        Self {
            suite,
            reference: ReferenceStatistics::boxed,
            registry,
            progress: false,
        }
    }

    /// Validate against a different implementation than the built-in reference
    pub fn with_reference(mut self, reference: Factory) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// The suite must pass in full against the reference before mutants mean anything
    pub fn validate_suite(&self) -> AppResult<SuiteOutcome> {
        debug!("Validating {} cases against the reference", self.suite.cases().len());
        let outcome = SuiteRunner::new(&self.suite).run("reference", self.reference);
        if !outcome.all_passed() {
            for case in outcome.cases.iter().filter(|c| c.is_failed()) {
                warn!(
                    "{}: {}",
                    case.case,
                    case.message.as_deref().unwrap_or_default()
                );
            }
            let failed = outcome
                .failed_cases()
                .into_iter()
                .map(String::from)
                .collect();
            return Err(AppError::InvalidSuite(failed));
        }
        Ok(outcome)
    }

    pub fn run_mutant(&self, mutant: &RegisteredImplementation) -> MutantReport {
        let outcome = SuiteRunner::new(&self.suite).run(&mutant.name, mutant.factory);
        MutantReport::from_outcome(&mutant.name, &mutant.description, mutant.class, &outcome)
    }

    /// Validate the suite, then run it against each mutant in registration order
    pub fn run(&self) -> AppResult<CampaignReport> {
        let reference = self.validate_suite()?;
        info!(
            "Suite of {} cases passes against the reference, running {} mutants",
            reference.total_count(),
            self.registry.len()
        );

        let bar = self.progress_bar();
        let mut mutants = Vec::with_capacity(self.registry.len());
        for mutant in self.registry.iter() {
            bar.set_message(mutant.name.clone());
            let report = self.run_mutant(mutant);
            debug!("{} {}", report.id, report.status.display());
            mutants.push(report);
            bar.inc(1);
        }
        bar.finish_and_clear();

        Ok(CampaignReport {
            time: Utc::now(),
            reference,
            mutants,
        })
    }

    /// Like [`Harness::run`], but a surviving mutant is an error
    pub fn verify(&self) -> AppResult<CampaignReport> {
        let report = self.run()?;
        report.ensure_all_caught()?;
        Ok(report)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(self.registry.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:30.green} {pos}/{len} mutants {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementations::catalog;
    use crate::types::DeviationClass;

    #[test]
    fn selected_mutants_are_all_caught() {
        let mut registry = catalog::registry();
        registry
            .retain_names(&["L2".to_string(), "EN".to_string()])
            .unwrap();
        let report = Harness::new(Suite::default(), registry).verify().unwrap();
        assert_eq!(report.mutants.len(), 2);
        assert_eq!(report.caught_count(), 2);
    }

    #[test]
    fn reference_posing_as_mutant_survives() {
        let mut registry = ImplementationRegistry::new();
        registry.register(
            "same",
            "identical to the reference",
            DeviationClass::Storage,
            ReferenceStatistics::boxed,
        );
        let err = Harness::new(Suite::default(), registry).verify().unwrap_err();
        assert!(matches!(err, AppError::SurvivingMutants(ids) if ids == vec!["same"]));
    }
}
