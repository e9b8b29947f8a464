//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vuemaker - single-file component builder
///
/// Merge sibling .html/.jade, .css/.scss/.styl and .js/.coffee files into .vue components.
#[derive(Parser, Debug)]
#[command(
    name = "vuemaker",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge sibling template, style and script files into .vue components",
    long_about = "vuemaker groups files sharing a base name (hello.html, hello.css, hello.js) \
                  and writes one single-file component per group (hello.vue) with its blocks \
                  ordered style, template, script.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  vuemaker build src/components\n    \
                  vuemaker build src --out dist --exclude 'vendor/**'\n    \
                  vuemaker build src --dry-run\n    \
                  vuemaker kinds"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build components from a source directory
    Build(BuildArgs),

    /// Show the extension table and block order
    Kinds(KindsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Build in place:\n    vuemaker build src/components\n\n\
                   Build into another directory:\n    vuemaker build src --out dist\n\n\
                   Only some sources:\n    vuemaker build src --include 'pages/**'\n\n\
                   Preview without writing:\n    vuemaker build src --dry-run")]
pub struct BuildArgs {
    /// Directory containing the component sources
    pub source: PathBuf,

    /// Output directory (defaults to the source directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Configuration file (defaults to vuemaker.yaml in the source directory)
    #[arg(long, short = 'c', value_name = "FILE", env = "VUEMAKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only use sources matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Ignore sources matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Assemble components without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the kinds command
#[derive(Parser, Debug)]
pub struct KindsArgs {
    /// Configuration file to apply on top of the built-in table
    #[arg(long, short = 'c', value_name = "FILE", env = "VUEMAKER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    vuemaker completions --shell bash > ~/.bash_completion.d/vuemaker\n\n\
                  Generate zsh completions:\n    vuemaker completions --shell zsh > ~/.zfunc/_vuemaker\n\n\
                  Generate fish completions:\n    vuemaker completions --shell fish > ~/.config/fish/completions/vuemaker.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
