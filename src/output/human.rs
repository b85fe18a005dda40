//! Human-readable output formatting

use crate::engine::{Outcome, RunReport};
use crate::target::TargetProfile;

pub fn report_human(report: &RunReport) -> String {
    let mut output = format!(
        "Removal run: {}{}\n",
        report.profile,
        if report.dry_run { " (dry run)" } else { "" }
    );
    output.push_str(&"-".repeat(output.trim_end().len()));
    output.push('\n');

    let total = report.phases.len();
    for (index, phase) in report.phases.iter().enumerate() {
        output.push_str(&format!("\n[{}/{}] {}\n", index + 1, total, phase.phase));
        if phase.items.is_empty() {
            output.push_str("  nothing matched\n");
            continue;
        }

        let width = phase.items.iter().map(|i| i.item.len()).max().unwrap_or(0);
        for item in &phase.items {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                item.item,
                describe(&item.outcome),
                width = width
            ));
        }
    }

    let elapsed = report.finished_at - report.started_at;
    output.push_str(&format!(
        "\nSummary: {} succeeded, {} failed ({} ms)",
        report.succeeded(),
        report.failures(),
        elapsed.num_milliseconds()
    ));
    output
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Done => "ok".to_string(),
        Outcome::NotFound(detail) => format!("not found: {}", detail),
        Outcome::Planned(detail) => detail.clone(),
        Outcome::Failed(detail) => format!("FAILED: {}", detail),
    }
}

pub fn profile_human(profile: &TargetProfile) -> String {
    let mut output = format!(
        "Profile: {}\n\
         Process prefix: {}\n",
        profile.name, profile.process_prefix
    );

    output.push_str("\nServices:\n");
    for name in &profile.services {
        output.push_str(&format!("  {}\n", name));
    }

    output.push_str("\nRegistry keys:\n");
    for key in &profile.registry_keys {
        output.push_str(&format!("  {}\n", key));
    }

    output.push_str("\nDirectories:\n");
    for dir in &profile.directories {
        output.push_str(&format!("  {}\n", dir.display()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ItemReport, Phase, PhaseReport};
    use crate::target::zscaler;
    use chrono::Utc;

    fn report() -> RunReport {
        let now = Utc::now();
        RunReport {
            profile: "zscaler".to_string(),
            dry_run: false,
            started_at: now,
            finished_at: now,
            phases: vec![
                PhaseReport {
                    phase: Phase::Terminate,
                    items: vec![],
                },
                PhaseReport {
                    phase: Phase::DeleteServices,
                    items: vec![
                        ItemReport {
                            item: "ZSAService".to_string(),
                            outcome: Outcome::Done,
                        },
                        ItemReport {
                            item: "ZSAUpm".to_string(),
                            outcome: Outcome::NotFound("Service not found: ZSAUpm".to_string()),
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_report_human() {
        let text = report_human(&report());
        assert!(text.starts_with("Removal run: zscaler\n"));
        assert!(text.contains("[1/2] Terminate processes\n  nothing matched"));
        assert!(text.contains("ZSAService  ok"));
        assert!(text.contains("not found: Service not found: ZSAUpm"));
        assert!(text.contains("Summary: 1 succeeded, 1 failed"));
    }

    #[test]
    fn test_profile_human() {
        let text = profile_human(&zscaler());
        assert!(text.contains("Process prefix: ZSA"));
        assert!(text.contains(r"HKLM\SOFTWARE\Zscaler Inc."));
        assert!(text.contains("ZSATrayManager"));
    }
}
