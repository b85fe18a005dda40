//! Output formatting

use crate::engine::RunReport;
use crate::output::human::{profile_human, report_human};
use crate::output::json::to_json;
use crate::target::TargetProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_report(report: &RunReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => report_human(report),
        OutputFormat::Json => to_json(report),
    }
}

pub fn format_profile(profile: &TargetProfile, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => profile_human(profile),
        OutputFormat::Json => to_json(profile),
    }
}
