//! Kinds command: print the effective classification table

use console::Style;

use crate::cli::KindsArgs;
use crate::component::ExtensionClassifier;
use crate::config::Config;
use crate::error::Result;

/// Run kinds command
pub fn run(args: KindsArgs) -> Result<()> {
    let config = match args.config {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    println!("{}", Style::new().bold().apply_to("Extensions:"));
    for line in table_lines(&config.classifier()) {
        println!("  {line}");
    }

    println!();
    let order: Vec<&str> = config.block_order.iter().map(|tag| tag.as_str()).collect();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Block order:"),
        order.join(" < ")
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Target extension:"),
        config.target_extension
    );

    Ok(())
}

fn table_lines(classifier: &ExtensionClassifier) -> Vec<String> {
    classifier
        .entries()
        .into_iter()
        .map(|(ext, kind)| match &kind.lang {
            Some(lang) => format!("{ext:<10} <{} lang=\"{lang}\">", kind.tag),
            None => format!("{ext:<10} <{}>", kind.tag),
        })
        .collect()
}
