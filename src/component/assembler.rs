//! Rendering of one component group into a single-file component document

use super::aggregator::ComponentGroup;
use super::kind::{ElementKind, Tag};
use super::record::OutputRecord;
use super::scope::is_scoped;

/// A rendered block waiting to be ordered
struct Block {
    tag: Tag,
    text: String,
}

/// Orders and wraps the blocks of a component
#[derive(Debug, Clone)]
pub struct ComponentAssembler {
    block_order: Vec<Tag>,
}

impl ComponentAssembler {
    /// Create an assembler emitting blocks in `block_order`.
    ///
    /// Tags missing from `block_order` are placed after all listed tags.
    pub fn new(block_order: Vec<Tag>) -> Self {
        Self { block_order }
    }

    fn priority(&self, tag: Tag) -> usize {
        self.block_order
            .iter()
            .position(|t| *t == tag)
            .unwrap_or(self.block_order.len())
    }

    /// Assemble the document for `component_name` from its group
    pub fn build(&self, component_name: &str, group: &ComponentGroup) -> OutputRecord {
        let mut blocks: Vec<Block> = group
            .iter()
            .map(|(kind, content)| Block {
                tag: kind.tag,
                text: render_block(kind, content),
            })
            .collect();

        // stable: equal tags keep their arrival order
        blocks.sort_by_key(|block| self.priority(block.tag));

        let document: String = blocks.into_iter().map(|block| block.text).collect();

        OutputRecord {
            path: component_name.to_string(),
            contents: document.into_bytes(),
        }
    }
}

impl Default for ComponentAssembler {
    fn default() -> Self {
        Self::new(Tag::ALL.to_vec())
    }
}

/// Wrap `content` in the opening and closing tags for `kind`
pub fn render_block(kind: &ElementKind, content: &str) -> String {
    let tag = kind.tag.as_str();
    let lang = kind
        .lang
        .as_deref()
        .map(|lang| format!(" lang=\"{lang}\""))
        .unwrap_or_default();
    let scoped = if is_scoped(content) { " scoped" } else { "" };

    format!("<{tag}{lang}{scoped}>\n{content}</{tag}>\n\n")
}
