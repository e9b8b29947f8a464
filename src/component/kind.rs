//! Element kinds: which block of a component an input file becomes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level block tag of a single-file component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Style,
    Template,
    Script,
}

impl Tag {
    /// All tags in their default block order
    pub const ALL: [Tag; 3] = [Tag::Style, Tag::Template, Tag::Script];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Style => "style",
            Tag::Template => "template",
            Tag::Script => "script",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an input: the block tag plus an optional `lang` attribute.
///
/// Two kinds are the same grouping key only when both the tag and the
/// language match, so `.css` and `.scss` inputs of one component land in
/// separate blocks while two `.css` inputs collapse into one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKind {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl ElementKind {
    pub fn new(tag: Tag) -> Self {
        Self { tag, lang: None }
    }

    pub fn with_lang(tag: Tag, lang: impl Into<String>) -> Self {
        Self {
            tag,
            lang: Some(lang.into()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lang {
            Some(lang) => write!(f, "{}:{}", self.tag, lang),
            None => write!(f, "{}", self.tag),
        }
    }
}
