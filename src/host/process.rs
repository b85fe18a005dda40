//! Process table
//!
//! Snapshots come from sysinfo. Termination on Windows opens the process
//! with terminate rights and calls TerminateProcess directly, so a refusal
//! carries the OS error instead of a bare "failed".

use crate::error::{RazeError, Result};
use crate::host::{ProcessRecord, ProcessTable};
use std::io;
#[cfg(not(windows))]
use sysinfo::Pid;
use sysinfo::System;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SystemProcesses;

impl ProcessTable for SystemProcesses {
    fn snapshot(&self) -> Result<Vec<ProcessRecord>> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(RazeError::EnumerationError(
                "process enumeration is not supported on this system".to_string(),
            ));
        }

        let mut sys = System::new();
        sys.refresh_processes();

        let mut records: Vec<ProcessRecord> = sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                name: process.name().to_string(),
            })
            .collect();

        // There is always at least this process; an empty table means the
        // snapshot could not be read.
        if records.is_empty() {
            return Err(RazeError::EnumerationError(
                "process snapshot is empty".to_string(),
            ));
        }

        records.sort_by_key(|r| r.pid);
        Ok(records)
    }

    #[cfg(windows)]
    fn terminate(&self, process: &ProcessRecord) -> Result<()> {
        use windows_sys::Win32::Foundation::{CloseHandle, FALSE, HANDLE};
        use windows_sys::Win32::System::Threading::{OpenProcess, TerminateProcess, PROCESS_TERMINATE};

        struct ProcessHandle(HANDLE);

        impl Drop for ProcessHandle {
            fn drop(&mut self) {
                unsafe {
                    CloseHandle(self.0);
                }
            }
        }

        let raw = unsafe { OpenProcess(PROCESS_TERMINATE, FALSE, process.pid) };
        if raw == 0 {
            return open_failure(process, io::Error::last_os_error());
        }
        let handle = ProcessHandle(raw);

        if unsafe { TerminateProcess(handle.0, 0) } == FALSE {
            return Err(termination_error(process, io::Error::last_os_error()));
        }
        Ok(())
    }

    #[cfg(not(windows))]
    fn terminate(&self, process: &ProcessRecord) -> Result<()> {
        // Re-resolve the PID from a fresh refresh so a recycled PID with a
        // different name is never killed.
        let mut sys = System::new();
        let pid = Pid::from_u32(process.pid);
        if !sys.refresh_process(pid) {
            debug!(pid = process.pid, name = %process.name, "process already exited");
            return Ok(());
        }

        let Some(current) = sys.process(pid) else {
            return Ok(());
        };
        if current.name() != process.name {
            return Err(RazeError::TerminationError {
                name: process.name.clone(),
                pid: process.pid,
                reason: format!("PID now belongs to {}", current.name()),
            });
        }

        if current.kill() {
            Ok(())
        } else {
            Err(termination_error(
                process,
                io::Error::new(io::ErrorKind::PermissionDenied, "kill was refused"),
            ))
        }
    }
}

/// OpenProcess reports a PID that no longer exists as an invalid parameter.
const ERROR_INVALID_PARAMETER: i32 = 87;

/// Classify a failed open: a vanished process is fine, anything else
/// (access denied above all) means the process is still running.
#[cfg_attr(not(windows), allow(dead_code))]
fn open_failure(process: &ProcessRecord, err: io::Error) -> Result<()> {
    if err.raw_os_error() == Some(ERROR_INVALID_PARAMETER) {
        debug!(pid = process.pid, name = %process.name, "process already exited");
        return Ok(());
    }
    Err(termination_error(process, err))
}

fn termination_error(process: &ProcessRecord, err: io::Error) -> RazeError {
    RazeError::TerminationError {
        name: process.name.clone(),
        pid: process.pid,
        reason: err.to_string(),
    }
}
