//! Per-run accumulation of component sources
//!
//! The aggregator is created at the start of a build, fed one input at a
//! time, and consumed once at the end. Components keep the order in which
//! they were first seen; within a component each element kind holds exactly
//! one content string, and a later input of the same kind replaces it.

use std::collections::HashMap;

use tracing::debug;

use super::assembler::ComponentAssembler;
use super::classify::ExtensionClassifier;
use super::kind::ElementKind;
use super::record::{Contents, InputRecord, OutputRecord, replace_extension};
use crate::error::{Result, VuemakerError};

/// Default extension of assembled components
pub const DEFAULT_TARGET_EXTENSION: &str = ".vue";

/// Blocks collected for one component, in first-seen kind order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentGroup {
    blocks: Vec<(ElementKind, String)>,
}

impl ComponentGroup {
    /// Store `content` under `kind`, returning the content it replaced.
    ///
    /// A replaced kind keeps its original position.
    pub fn insert(&mut self, kind: ElementKind, content: String) -> Option<String> {
        match self.blocks.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => Some(std::mem::replace(existing, content)),
            None => {
                self.blocks.push((kind, content));
                None
            }
        }
    }

    pub fn get(&self, kind: &ElementKind) -> Option<&str> {
        self.blocks
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, content)| content.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementKind, &str)> {
        self.blocks
            .iter()
            .map(|(kind, content)| (kind, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// What happened to an ingested record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    /// Added as a new block
    Added,
    /// Replaced an earlier input of the same kind
    Replaced,
    /// Not a component source
    Skipped,
}

/// Accumulates inputs into components for a single build run.
///
/// [`drain`](Self::drain) and [`finalize`](Self::finalize) take the
/// aggregator by value, so it cannot be drained twice.
#[derive(Debug)]
pub struct ComponentAggregator {
    classifier: ExtensionClassifier,
    target_extension: String,
    components: Vec<(String, ComponentGroup)>,
    by_name: HashMap<String, usize>,
}

impl ComponentAggregator {
    pub fn new(classifier: ExtensionClassifier, target_extension: impl Into<String>) -> Self {
        Self {
            classifier,
            target_extension: target_extension.into(),
            components: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Offer one input record.
    ///
    /// Records without content or with an unknown extension are skipped.
    /// Streaming records are rejected and leave the aggregator unchanged.
    pub fn ingest(&mut self, record: InputRecord) -> Result<Ingested> {
        let content = match record.contents {
            Contents::Absent => {
                debug!(path = %record.relative_path, "skipping input without content");
                return Ok(Ingested::Skipped);
            }
            Contents::Streaming => {
                return Err(VuemakerError::StreamingNotSupported {
                    path: record.relative_path,
                });
            }
            Contents::Buffered(content) => content,
        };

        let Some(kind) = self.classifier.classify(&record.extension).cloned() else {
            debug!(
                path = %record.relative_path,
                extension = %record.extension,
                "skipping unsupported extension"
            );
            return Ok(Ingested::Skipped);
        };

        let component_name = replace_extension(&record.relative_path, &self.target_extension);
        let group = self.group_mut(component_name.clone());

        if group.insert(kind.clone(), content).is_some() {
            debug!(
                component = %component_name,
                %kind,
                path = %record.relative_path,
                "replacing earlier block of the same kind"
            );
            Ok(Ingested::Replaced)
        } else {
            debug!(component = %component_name, %kind, "added block");
            Ok(Ingested::Added)
        }
    }

    fn group_mut(&mut self, component_name: String) -> &mut ComponentGroup {
        let idx = match self.by_name.get(&component_name) {
            Some(&idx) => idx,
            None => {
                let idx = self.components.len();
                self.by_name.insert(component_name.clone(), idx);
                self.components
                    .push((component_name, ComponentGroup::default()));
                idx
            }
        };
        &mut self.components[idx].1
    }

    /// Number of components seen so far
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Hand out all groups in first-seen order, consuming the aggregator
    pub fn drain(self) -> Vec<(String, ComponentGroup)> {
        self.components
    }

    /// Assemble every component, consuming the aggregator
    pub fn finalize(self, assembler: &ComponentAssembler) -> Vec<OutputRecord> {
        self.drain()
            .iter()
            .map(|(name, group)| assembler.build(name, group))
            .collect()
    }
}

impl Default for ComponentAggregator {
    fn default() -> Self {
        Self::new(ExtensionClassifier::default(), DEFAULT_TARGET_EXTENSION)
    }
}
