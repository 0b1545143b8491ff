use console::{Term, style};
use log::info;
use strum::IntoEnumIterator;

use crate::types::{AppResult, CampaignReport, DeviationClass, MutantReport};

/// Print a campaign report as `json` or as the default log table
pub fn render(report: &CampaignReport, format: &str) -> AppResult<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{}", json);
        }
        _ => {
            print_table_format(report);
        }
    }
    Ok(())
}

/// One line per mutant, naming the cases that killed it
pub fn mutant_line(mutant: &MutantReport) -> String {
    if mutant.is_caught() {
        format!(
            "{} fails on: {}",
            style(&mutant.id).green(),
            mutant.failed_cases.join(", ")
        )
    } else {
        format!(
            "{} {}",
            style(&mutant.id).red().bold(),
            style("write some test to kill it").red()
        )
    }
}

fn print_table_format(report: &CampaignReport) {
    let width = terminal_width();

    info!("Mutation Adequacy Report");
    info!("");
    info!(
        "Reference: {} of {} cases passed",
        report.reference.passed_count(),
        report.reference.total_count()
    );
    info!("");
    info!("Per-Mutant Breakdown:");
    info!("=====================");

    if report.mutants.is_empty() {
        info!("No mutants selected.");
        return;
    }

    for mutant in &report.mutants {
        let line = mutant_line(mutant);
        match width {
            Some(width) => info!("{}", console::truncate_str(&line, width, "...")),
            None => info!("{}", line),
        }
    }

    info!("");
    info!("Catch Rates by Deviation:");
    info!("=========================");
    let stats = report.class_stats();
    for class in DeviationClass::iter() {
        if let Some((eligible, caught)) = stats.by_class.get(&class) {
            info!(
                "  {:<12} {}/{} caught ({}), {}",
                class.to_string(),
                caught,
                eligible,
                format_rate(stats.catch_rate(class)),
                class.summary()
            );
        }
    }

    info!("");
    info!(
        "Outcomes: {} caught, {} survived of {} mutants ({:.1}%)",
        report.caught_count(),
        report.mutants.len() - report.caught_count(),
        report.mutants.len(),
        report.percent_caught()
    );
}

/// Terminal width in columns, if stdout is a terminal
fn terminal_width() -> Option<usize> {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.1}%", r),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MutantStatus;

    fn report(status: MutantStatus, failed: Vec<&'static str>) -> MutantReport {
        MutantReport {
            id: "O1".to_string(),
            description: "alphabetical order only".to_string(),
            class: DeviationClass::Ordering,
            status,
            failed_cases: failed,
            total_cases: 21,
        }
    }

    #[test]
    fn caught_line_lists_killing_cases() {
        let line = console::strip_ansi_codes(&mutant_line(&report(
            MutantStatus::Caught,
            vec!["first_case", "second_case"],
        )))
        .to_string();
        assert_eq!(line, "O1 fails on: first_case, second_case");
    }

    #[test]
    fn survivor_line_asks_for_a_test() {
        let line =
            console::strip_ansi_codes(&mutant_line(&report(MutantStatus::Survived, vec![])))
                .to_string();
        assert_eq!(line, "O1 write some test to kill it");
    }

    #[test]
    fn missing_rate_prints_na() {
        assert_eq!(format_rate(None), "N/A");
        assert_eq!(format_rate(Some(50.0)), "50.0%");
    }
}
