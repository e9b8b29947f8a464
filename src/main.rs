//! vuemaker - single-file component builder
//!
//! Command line entry point; see the library crate for the engine.

use clap::Parser;
use miette::Diagnostic;

use vuemaker::cli::{Cli, Commands};
use vuemaker::{commands, telemetry};

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Kinds(args) => commands::kinds::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.report_line());
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
