//! Razed - removes what a broken installation left behind
//!
//! Given a target profile, Razed terminates the software's processes,
//! deletes its services, removes its registry subtrees and deletes its
//! directories, in that order. Every item is attempted even when earlier
//! ones fail.
//!
//! # Example
//!
//! ```no_run
//! use razed::{format_report, Orchestrator, OutputFormat, RunOptions, SystemHost, TargetProfile};
//!
//! let profile = TargetProfile::builtin("zscaler").unwrap();
//! let system = SystemHost::new();
//! let report = Orchestrator::new(system.host(), RunOptions { dry_run: true })
//!     .run(&profile)
//!     .unwrap();
//! println!("{}", format_report(&report, &OutputFormat::Human));
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod host;
pub mod logging;
pub mod output;
pub mod target;

pub use engine::{Orchestrator, Outcome, Phase, RunOptions, RunReport};
pub use error::{RazeError, Result};
pub use host::{Host, SystemHost};
pub use output::{format_profile, format_report, OutputFormat};
pub use target::{RegistryNode, RegistryRoot, TargetProfile};
