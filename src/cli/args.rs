//! CLI argument parsing

use clap::{Parser, Subcommand};

pub const DEFAULT_PROFILE: &str = "zscaler";

#[derive(Parser)]
#[command(name = "razed")]
#[command(author, version, about = "Remove the leftovers of a broken software installation", long_about = None)]
pub struct Args {
    /// What to do; without a subcommand the default profile is purged
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Terminate processes and delete services, registry keys and directories
    Purge {
        /// Compiled-in target profile
        #[arg(long, short, default_value = DEFAULT_PROFILE)]
        profile: String,

        /// Show what would be removed without removing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print what a profile removes
    Show {
        /// Compiled-in target profile
        #[arg(long, short, default_value = DEFAULT_PROFILE)]
        profile: String,
    },

    /// List the compiled-in profiles
    Profiles,
}
