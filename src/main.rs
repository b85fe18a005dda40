//! Razed CLI - remove a broken installation's processes, services, keys and files

use clap::Parser;
use razed::cli::args::DEFAULT_PROFILE;
use razed::cli::{Args, SubCommand};
use razed::target::builtin_profile_names;
use razed::{
    format_profile, format_report, Orchestrator, OutputFormat, RunOptions, SystemHost,
    TargetProfile,
};

fn main() {
    let args = Args::parse();
    razed::logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> razed::Result<()> {
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    let command = args.command.unwrap_or(SubCommand::Purge {
        profile: DEFAULT_PROFILE.to_string(),
        dry_run: false,
    });

    match command {
        SubCommand::Purge { profile, dry_run } => {
            let profile = TargetProfile::builtin(&profile)?;
            let system = SystemHost::new();
            let report = Orchestrator::new(system.host(), RunOptions { dry_run }).run(&profile)?;
            println!("{}", format_report(&report, &output_format));
            Ok(())
        }

        SubCommand::Show { profile } => {
            let profile = TargetProfile::builtin(&profile)?;
            println!("{}", format_profile(&profile, &output_format));
            Ok(())
        }

        SubCommand::Profiles => {
            match output_format {
                OutputFormat::Json => println!("{}", razed::output::json::to_json(&builtin_profile_names())),
                OutputFormat::Human => {
                    println!("Profiles:");
                    println!("---------");
                    for name in builtin_profile_names() {
                        println!("  {}", name);
                    }
                }
            }
            Ok(())
        }
    }
}
