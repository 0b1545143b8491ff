use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use log::{debug, trace};

use crate::Factory;
use crate::core::suite::{CaseContext, CaseFailure, Suite, TestCase};
use crate::types::{CaseOutcome, CaseStatus, SuiteOutcome};

/// Executes a suite in-process against whatever a factory builds
pub struct SuiteRunner<'a> {
    suite: &'a Suite,
}

impl<'a> SuiteRunner<'a> {
    pub fn new(suite: &'a Suite) -> Self {
        Self { suite }
    }

    /// Run every case in order, each with its own fresh subject
    pub fn run(&self, subject: &str, factory: Factory) -> SuiteOutcome {
        let ctx = CaseContext::new(factory, self.suite.settings().clone());
        let cases: Vec<CaseOutcome> = self
            .suite
            .cases()
            .iter()
            .map(|case| Self::run_case(case, &ctx))
            .collect();
        let outcome = SuiteOutcome {
            subject: subject.to_string(),
            cases,
        };
        debug!(
            "{}: {} passed, {} failed",
            subject,
            outcome.passed_count(),
            outcome.failed_count()
        );
        outcome
    }

    /// Run one case, turning a panic inside the subject into a failure
    pub fn run_case(case: &TestCase, ctx: &CaseContext) -> CaseOutcome {
        let started = Instant::now();
        let result = match panic::catch_unwind(AssertUnwindSafe(|| (case.run)(ctx))) {
            Ok(result) => result,
            Err(payload) => Err(CaseFailure::Panicked(panic_message(payload.as_ref()))),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                trace!("  {} passed in {}ms", case.name, duration_ms);
                CaseOutcome {
                    case: case.name,
                    status: CaseStatus::Passed,
                    message: None,
                    duration_ms,
                }
            }
            Err(failure) => {
                trace!("  {} failed in {}ms: {}", case.name, duration_ms, failure);
                CaseOutcome {
                    case: case.name,
                    status: CaseStatus::Failed,
                    message: Some(failure.to_string()),
                    duration_ms,
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
