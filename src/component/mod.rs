//! Component engine: classification, grouping and assembly
//!
//! Inputs are classified by extension into an [`ElementKind`], grouped by
//! the component name derived from their path, and assembled into one
//! document per component with blocks in a fixed order.

pub mod aggregator;
pub mod assembler;
pub mod classify;
pub mod kind;
pub mod record;
pub mod scope;

pub use aggregator::{ComponentAggregator, ComponentGroup, DEFAULT_TARGET_EXTENSION, Ingested};
pub use assembler::ComponentAssembler;
pub use classify::ExtensionClassifier;
pub use kind::{ElementKind, Tag};
pub use record::{Contents, InputRecord, OutputRecord};
pub use scope::is_scoped;
