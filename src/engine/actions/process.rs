//! Process termination action

use crate::error::{RazeError, Result};
use crate::host::{ProcessRecord, ProcessTable};
use tracing::{debug, info, warn};

/// Outcome of one termination sweep.
#[derive(Debug)]
pub struct TerminationReport {
    /// Number of processes in the snapshot
    pub scanned: usize,
    /// Each matched process with the result of its termination request
    pub results: Vec<(ProcessRecord, Result<()>)>,
}

impl TerminationReport {
    pub fn terminated(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }
}

/// Processes in a fresh snapshot whose executable name starts with `prefix`.
///
/// The match is case-sensitive and applies to the file name only.
pub fn matching_processes(table: &dyn ProcessTable, prefix: &str) -> Result<Vec<ProcessRecord>> {
    if prefix.is_empty() {
        return Err(RazeError::InvalidTarget(
            "process prefix must not be empty".to_string(),
        ));
    }

    let snapshot = table.snapshot()?;
    Ok(snapshot
        .into_iter()
        .filter(|p| p.name.starts_with(prefix))
        .collect())
}

/// Terminate every process whose executable name starts with `prefix`.
///
/// A snapshot failure aborts the call. A process that cannot be terminated
/// is recorded in the report and the sweep moves on to the next match.
pub fn stop_processes(table: &dyn ProcessTable, prefix: &str) -> Result<TerminationReport> {
    if prefix.is_empty() {
        return Err(RazeError::InvalidTarget(
            "process prefix must not be empty".to_string(),
        ));
    }

    let snapshot = table.snapshot()?;
    let scanned = snapshot.len();
    let mut results = Vec::new();

    for process in snapshot {
        if !process.name.starts_with(prefix) {
            continue;
        }

        let result = table.terminate(&process);
        match &result {
            Ok(()) => debug!(pid = process.pid, name = %process.name, "terminated"),
            Err(e) => warn!("Failed to stop process {} (PID {}): {}", process.name, process.pid, e),
        }
        results.push((process, result));
    }

    let report = TerminationReport { scanned, results };
    info!(
        prefix,
        scanned = report.scanned,
        matched = report.results.len(),
        terminated = report.terminated(),
        "process sweep finished"
    );
    Ok(report)
}
