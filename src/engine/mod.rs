//! Removal engine

pub mod actions;
pub mod orchestrator;

pub use orchestrator::{ItemReport, Orchestrator, Outcome, Phase, PhaseReport, RunOptions, RunReport};
