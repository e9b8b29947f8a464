//! Build pipeline: feeds a source tree through the component engine
//!
//! The pipeline walks the source directory, turns every entry into an
//! [`InputRecord`], ingests them one at a time and, once the walk is
//! complete, assembles and writes all components. Any error aborts the
//! run before a single component is written.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::component::{Contents, Ingested, InputRecord, OutputRecord};
use crate::config::Config;
use crate::error::{Result, VuemakerError};
use crate::hash;

/// Options for one build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Directory holding the component sources
    pub source_dir: PathBuf,
    /// Where to write components (defaults to `source_dir`)
    pub out_dir: Option<PathBuf>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Only ingest paths matching one of these globs
    pub include: Vec<String>,
    /// Never ingest paths matching one of these globs
    pub exclude: Vec<String>,
    /// Assemble but do not write
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Effective output directory
    pub fn out_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(&self.source_dir)
    }
}

/// Outcome of a build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries offered to the aggregator
    pub inputs: usize,
    /// Entries that were not component sources
    pub skipped: usize,
    /// Sources that replaced an earlier source of the same kind
    pub replaced: usize,
    /// Components written (or that would be written on a dry run)
    pub written: Vec<String>,
    /// Components whose file already had identical content
    pub unchanged: Vec<String>,
}

impl BuildReport {
    pub fn components(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// Include/exclude filter over `/`-separated relative paths
struct PathFilter<'a> {
    include: Vec<Glob<'a>>,
    exclude: Vec<Glob<'a>>,
}

impl<'a> PathFilter<'a> {
    fn new(include: &'a [String], exclude: &'a [String]) -> Result<Self> {
        Ok(Self {
            include: compile_globs(include)?,
            exclude: compile_globs(exclude)?,
        })
    }

    fn accepts(&self, relative_path: &str) -> bool {
        let candidate = CandidatePath::from(relative_path);
        let included = self.include.is_empty()
            || self
                .include
                .iter()
                .any(|glob| glob.matched(&candidate).is_some());
        included
            && !self
                .exclude
                .iter()
                .any(|glob| glob.matched(&candidate).is_some())
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Glob<'_>>> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| VuemakerError::InvalidGlob {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Path of `entry` relative to `root` with forward slashes
fn relative_path(root: &Path, entry: &DirEntry) -> String {
    entry
        .path()
        .strip_prefix(root)
        .unwrap_or(entry.path())
        .to_string_lossy()
        .replace('\\', "/")
}

/// Turn a directory entry into an input record
fn read_record(entry: &DirEntry, relative_path: String) -> Result<InputRecord> {
    let file_type = entry.file_type();

    if file_type.is_dir() {
        return Ok(InputRecord::absent(relative_path));
    }
    if !file_type.is_file() {
        return Ok(InputRecord::streaming(relative_path));
    }

    let content =
        std::fs::read_to_string(entry.path()).map_err(|e| VuemakerError::FileReadFailed {
            path: entry.path().display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(InputRecord::new(relative_path, Contents::Buffered(content)))
}

/// Walk the source tree and assemble all components without writing them
pub fn assemble(
    options: &BuildOptions,
    config: &Config,
) -> Result<(Vec<OutputRecord>, BuildReport)> {
    let source_dir = &options.source_dir;
    if !source_dir.is_dir() {
        return Err(VuemakerError::SourceNotFound {
            path: source_dir.display().to_string(),
        });
    }

    let filter = PathFilter::new(&options.include, &options.exclude)?;
    let mut aggregator = config.aggregator();
    let mut report = BuildReport::default();

    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let relative = relative_path(source_dir, &entry);

        if !entry.file_type().is_dir() && !filter.accepts(&relative) {
            debug!(path = %relative, "excluded by filter");
            continue;
        }

        report.inputs += 1;
        match aggregator.ingest(read_record(&entry, relative)?)? {
            Ingested::Added => {}
            Ingested::Replaced => report.replaced += 1,
            Ingested::Skipped => report.skipped += 1,
        }
    }

    debug!(components = aggregator.len(), "input exhausted, assembling");
    let outputs = aggregator.finalize(&config.assembler());
    Ok((outputs, report))
}

/// Write assembled components below `out_dir`, skipping identical files
fn write_outputs(
    out_dir: &Path,
    outputs: &[OutputRecord],
    report: &mut BuildReport,
) -> Result<()> {
    for output in outputs {
        let target = out_dir.join(&output.path);

        if hash::file_matches(&target, &output.contents)? {
            debug!(path = %output.path, "unchanged");
            report.unchanged.push(output.path.clone());
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| VuemakerError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        std::fs::write(&target, &output.contents).map_err(|e| VuemakerError::FileWriteFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;

        info!(path = %output.path, bytes = output.contents.len(), "wrote component");
        report.written.push(output.path.clone());
    }

    Ok(())
}

/// Run a full build
pub fn build(options: &BuildOptions) -> Result<BuildReport> {
    let config = Config::resolve(options.config.as_deref(), &options.source_dir)?;
    let (outputs, mut report) = assemble(options, &config)?;

    if options.dry_run {
        report.written = outputs.into_iter().map(|output| output.path).collect();
        return Ok(report);
    }

    write_outputs(options.out_dir(), &outputs, &mut report)?;
    Ok(report)
}
