//! vuemaker - single-file component builder
//!
//! Merges sibling source files that share a base name (`hello.html`,
//! `hello.scss`, `hello.js`) into one `.vue` single-file component.
//!
//! The [`component`] module holds the engine: classification by
//! extension, per-run aggregation and block assembly. The [`pipeline`]
//! module drives it over a directory tree.

pub mod cli;
pub mod commands;
pub mod component;
pub mod config;
pub mod error;
pub mod hash;
pub mod pipeline;
pub mod telemetry;
