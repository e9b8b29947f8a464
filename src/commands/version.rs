//! Version command: package version plus the built-in component defaults

use console::Style;

use crate::component::{DEFAULT_TARGET_EXTENSION, ExtensionClassifier, Tag};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!(
        "{} {}",
        Style::new().bold().apply_to("vuemaker"),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Build info:");
    for line in info_lines(&ExtensionClassifier::default()) {
        println!("  {line}");
    }

    Ok(())
}

fn info_lines(classifier: &ExtensionClassifier) -> Vec<String> {
    let sources: Vec<&str> = classifier.entries().into_iter().map(|(ext, _)| ext).collect();
    let order: Vec<&str> = Tag::ALL.iter().map(|tag| tag.as_str()).collect();

    vec![
        format!("Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!("Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" }),
        format!("Component extension: {DEFAULT_TARGET_EXTENSION}"),
        format!("Source extensions: {}", sources.join(" ")),
        format!("Block order: {}", order.join(" < ")),
    ]
}
