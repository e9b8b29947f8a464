//! Command implementations for the vuemaker CLI

pub mod build;
pub mod completions;
pub mod kinds;
pub mod version;
