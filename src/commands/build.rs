//! Build command implementation

use console::Style;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::pipeline::{self, BuildOptions, BuildReport};

impl From<BuildArgs> for BuildOptions {
    fn from(args: BuildArgs) -> Self {
        Self {
            source_dir: args.source,
            out_dir: args.out,
            config: args.config,
            include: args.include,
            exclude: args.exclude,
            dry_run: args.dry_run,
        }
    }
}

/// Run build command
pub fn run(args: BuildArgs) -> Result<()> {
    let options = BuildOptions::from(args);
    let report = pipeline::build(&options)?;
    print_report(&options, &report);
    Ok(())
}

fn print_report(options: &BuildOptions, report: &BuildReport) {
    let verb = if options.dry_run { "Would write" } else { "Wrote" };

    for path in &report.written {
        println!("  {} {}", Style::new().green().apply_to(verb), path);
    }
    for path in &report.unchanged {
        println!("  {} {}", Style::new().dim().apply_to("Unchanged"), path);
    }

    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Components:"),
        summary_line(report)
    );
    if options.dry_run {
        println!("{}", Style::new().yellow().apply_to("Dry run: nothing was written"));
    }
}

fn summary_line(report: &BuildReport) -> String {
    let mut line = format!(
        "{} from {} input{}",
        report.components(),
        report.inputs,
        if report.inputs == 1 { "" } else { "s" }
    );
    if report.skipped > 0 {
        line.push_str(&format!(", {} skipped", report.skipped));
    }
    if report.replaced > 0 {
        line.push_str(&format!(", {} replaced", report.replaced));
    }
    if !report.unchanged.is_empty() {
        line.push_str(&format!(", {} unchanged", report.unchanged.len()));
    }
    line
}
