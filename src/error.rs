//! Error types and handling for vuemaker
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Identifier attached to every error surfaced by the component engine
pub const PLUGIN_NAME: &str = "vuemaker";

/// Main error type for vuemaker operations
#[derive(Error, Diagnostic, Debug)]
pub enum VuemakerError {
    // Input errors
    #[error("Streaming not supported")]
    #[diagnostic(
        code(vuemaker::input::streaming),
        help("'{path}' is not a regular file; only files with their full content available can be merged")
    )]
    StreamingNotSupported { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(vuemaker::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(vuemaker::config::parse_failed),
        help("Check the YAML syntax: {reason}")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(vuemaker::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(vuemaker::fs::source_not_found),
        help("Pass an existing directory containing .html, .css and .js files")
    )]
    SourceNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(vuemaker::fs::read_failed), help("{reason}"))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(vuemaker::fs::write_failed), help("{reason}"))]
    FileWriteFailed { path: String, reason: String },

    #[error("Invalid glob pattern: {pattern}")]
    #[diagnostic(code(vuemaker::fs::invalid_glob), help("{reason}"))]
    InvalidGlob { pattern: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(vuemaker::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(vuemaker::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl VuemakerError {
    /// Identifier of the component that raised this error
    pub fn plugin(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// One-line report prefixed with the plugin label
    pub fn report_line(&self) -> String {
        format!("[{}] {self}", self.plugin())
    }
}

impl From<serde_yaml::Error> for VuemakerError {
    fn from(err: serde_yaml::Error) -> Self {
        VuemakerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for VuemakerError {
    fn from(err: walkdir::Error) -> Self {
        match err.path() {
            Some(path) => VuemakerError::FileReadFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
            None => VuemakerError::IoError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VuemakerError>;
