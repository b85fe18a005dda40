//! Removal actions (system modifications)

pub mod files;
pub mod process;
pub mod registry;
pub mod service;

pub use files::remove_directory;
pub use process::{matching_processes, stop_processes, TerminationReport};
pub use registry::{plan_registry_removal, remove_registry_key};
pub use service::delete_service;
