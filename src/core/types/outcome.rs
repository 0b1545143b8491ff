use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::types::{AppError, AppResult, DeviationClass, DeviationStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
}

/// Result of one suite case against one implementation
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub case: &'static str,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

impl CaseOutcome {
    pub fn is_failed(&self) -> bool {
        self.status == CaseStatus::Failed
    }
}

/// Every case outcome of one full suite run against one subject
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    pub subject: String,
    pub cases: Vec<CaseOutcome>,
}

impl SuiteOutcome {
    pub fn total_count(&self) -> usize {
        self.cases.len()
    }

    pub fn failed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.is_failed()).count()
    }

    pub fn passed_count(&self) -> usize {
        self.total_count() - self.failed_count()
    }

    pub fn failed_cases(&self) -> Vec<&'static str> {
        self.cases
            .iter()
            .filter(|c| c.is_failed())
            .map(|c| c.case)
            .collect()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MutantStatus {
    /// At least one case failed
    Caught,
    /// The whole suite passed
    Survived,
}

impl MutantStatus {
    pub fn from_failed_count(failed: usize) -> Self {
        if failed > 0 {
            MutantStatus::Caught
        } else {
            MutantStatus::Survived
        }
    }

    pub fn display(&self) -> String {
        match self {
            MutantStatus::Caught => style("Caught").green().to_string(),
            MutantStatus::Survived => style("Survived").red().bold().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MutantReport {
    pub id: String,
    pub description: String,
    pub class: DeviationClass,
    pub status: MutantStatus,
    pub failed_cases: Vec<&'static str>,
    pub total_cases: usize,
}

impl MutantReport {
    pub fn from_outcome(
        id: &str,
        description: &str,
        class: DeviationClass,
        outcome: &SuiteOutcome,
    ) -> Self {
        let failed_cases = outcome.failed_cases();
        Self {
            id: id.to_string(),
            description: description.to_string(),
            class,
            status: MutantStatus::from_failed_count(failed_cases.len()),
            failed_cases,
            total_cases: outcome.total_count(),
        }
    }

    pub fn is_caught(&self) -> bool {
        self.status == MutantStatus::Caught
    }
}

/// Aggregate result of validating the suite and running it against every mutant
#[derive(Debug, Clone, Serialize)]
pub struct CampaignReport {
    pub time: DateTime<Utc>,
    pub reference: SuiteOutcome,
    pub mutants: Vec<MutantReport>,
}

impl CampaignReport {
    pub fn caught_count(&self) -> usize {
        self.mutants.iter().filter(|m| m.is_caught()).count()
    }

    pub fn survivors(&self) -> Vec<&MutantReport> {
        self.mutants.iter().filter(|m| !m.is_caught()).collect()
    }

    pub fn survivor_ids(&self) -> Vec<String> {
        self.survivors().iter().map(|m| m.id.clone()).collect()
    }

    pub fn percent_caught(&self) -> f64 {
        if self.mutants.is_empty() {
            0.0
        } else {
            (self.caught_count() as f64 / self.mutants.len() as f64) * 100.0
        }
    }

    pub fn class_stats(&self) -> DeviationStats {
        DeviationStats::from_reports(&self.mutants)
    }

    /// Fails with the identifiers of every mutant the suite let through
    pub fn ensure_all_caught(&self) -> AppResult<()> {
        let survivors = self.survivor_ids();
        if survivors.is_empty() {
            Ok(())
        } else {
            Err(AppError::SurvivingMutants(survivors))
        }
    }
}
