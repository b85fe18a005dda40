//! Removal run orchestration
//!
//! A run walks four phases in a fixed order: terminate processes, delete
//! services, remove registry subtrees, remove directories. Within a phase
//! every item is attempted and its outcome recorded; a failed item never
//! stops the next one. The only fatal error is a failed process snapshot in
//! the first phase, which ends the run before anything else is touched.

use crate::engine::actions::*;
use crate::error::{RazeError, Result};
use crate::host::Host;
use crate::target::TargetProfile;
use bytesize::ByteSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Runtime switches for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report what would be removed without touching anything
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Terminate,
    DeleteServices,
    RemoveRegistryKeys,
    RemoveDirectories,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Terminate,
        Phase::DeleteServices,
        Phase::RemoveRegistryKeys,
        Phase::RemoveDirectories,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Phase::Terminate => "Terminate processes",
            Phase::DeleteServices => "Delete services",
            Phase::RemoveRegistryKeys => "Remove registry keys",
            Phase::RemoveDirectories => "Remove directories",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    /// The item was already gone
    NotFound(String),
    /// Dry run: what would happen
    Planned(String),
    Failed(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::NotFound(_) | Outcome::Failed(_))
    }

    fn from_error(err: &RazeError) -> Self {
        if err.is_not_found() {
            Outcome::NotFound(err.to_string())
        } else {
            Outcome::Failed(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReport {
    pub item: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub items: Vec<ItemReport>,
}

impl PhaseReport {
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_failure()).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub profile: String,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub phases: Vec<PhaseReport>,
}

impl RunReport {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn failures(&self) -> usize {
        self.phases.iter().map(PhaseReport::failures).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.phases
            .iter()
            .flat_map(|p| &p.items)
            .filter(|i| !i.outcome.is_failure())
            .count()
    }
}

pub struct Orchestrator<'a> {
    host: Host<'a>,
    options: RunOptions,
}

impl<'a> Orchestrator<'a> {
    pub fn new(host: Host<'a>, options: RunOptions) -> Self {
        Self { host, options }
    }

    /// Run all four phases against `profile`.
    ///
    /// Returns `Err` only for an invalid profile or a failed process
    /// snapshot; per-item failures are in the report.
    pub fn run(&self, profile: &TargetProfile) -> Result<RunReport> {
        profile.validate()?;

        let started_at = Utc::now();
        info!(profile = %profile.name, dry_run = self.options.dry_run, "starting removal run");

        let mut phases = Vec::with_capacity(Phase::ALL.len());
        phases.push(self.terminate_phase(&profile.process_prefix)?);
        phases.push(self.services_phase(profile));
        phases.push(self.registry_phase(profile));
        phases.push(self.directories_phase(profile));

        let report = RunReport {
            profile: profile.name.clone(),
            dry_run: self.options.dry_run,
            started_at,
            finished_at: Utc::now(),
            phases,
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failures(),
            "removal run completed"
        );
        Ok(report)
    }

    fn terminate_phase(&self, prefix: &str) -> Result<PhaseReport> {
        info!(phase = %Phase::Terminate, prefix, "phase started");

        let items = if self.options.dry_run {
            matching_processes(self.host.processes, prefix)?
                .into_iter()
                .map(|p| ItemReport {
                    item: format!("{} (PID {})", p.name, p.pid),
                    outcome: Outcome::Planned("would terminate".to_string()),
                })
                .collect()
        } else {
            stop_processes(self.host.processes, prefix)?
                .results
                .into_iter()
                .map(|(p, result)| ItemReport {
                    item: format!("{} (PID {})", p.name, p.pid),
                    outcome: match result {
                        Ok(()) => Outcome::Done,
                        Err(e) => Outcome::from_error(&e),
                    },
                })
                .collect()
        };

        Ok(PhaseReport {
            phase: Phase::Terminate,
            items,
        })
    }

    fn services_phase(&self, profile: &TargetProfile) -> PhaseReport {
        run_phase(Phase::DeleteServices, &profile.services, |name| name.clone(), |name| {
            if self.options.dry_run {
                return Ok(Outcome::Planned("would delete".to_string()));
            }
            delete_service(self.host.services, name).map(|_| Outcome::Done)
        })
    }

    fn registry_phase(&self, profile: &TargetProfile) -> PhaseReport {
        run_phase(Phase::RemoveRegistryKeys, &profile.registry_keys, |node| node.to_string(), |node| {
            if self.options.dry_run {
                let plan = plan_registry_removal(self.host.registry, node)?;
                return Ok(Outcome::Planned(format!("would delete {} key(s)", plan.len())));
            }
            remove_registry_key(self.host.registry, node).map(|_| Outcome::Done)
        })
    }

    fn directories_phase(&self, profile: &TargetProfile) -> PhaseReport {
        run_phase(
            Phase::RemoveDirectories,
            &profile.directories,
            |dir| dir.display().to_string(),
            |dir| {
                if self.options.dry_run {
                    return Ok(match self.host.files.measure(dir)? {
                        Some(size) => Outcome::Planned(format!("would remove {}", ByteSize(size))),
                        None => Outcome::Planned("not present".to_string()),
                    });
                }
                remove_directory(self.host.files, dir).map(|_| Outcome::Done)
            },
        )
    }
}

/// Attempt every item in order, turning each failure into a recorded outcome.
fn run_phase<T>(
    phase: Phase,
    items: &[T],
    label: impl Fn(&T) -> String,
    mut attempt: impl FnMut(&T) -> Result<Outcome>,
) -> PhaseReport {
    info!(phase = %phase, items = items.len(), "phase started");

    let items = items
        .iter()
        .map(|item| {
            let item_label = label(item);
            let outcome = match attempt(item) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("{}: failed on {}: {}", phase, item_label, e);
                    Outcome::from_error(&e)
                }
            };
            ItemReport {
                item: item_label,
                outcome,
            }
        })
        .collect();

    PhaseReport { phase, items }
}
