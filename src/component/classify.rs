//! Extension classification table
//!
//! Maps a file extension (with its leading `.`) to the block the file
//! contributes to a component. Extensions missing from the table are not
//! component sources and are skipped by the aggregator.

use std::collections::HashMap;

use super::kind::{ElementKind, Tag};

/// Built-in extension table
const DEFAULT_EXTENSIONS: &[(&str, Tag, Option<&str>)] = &[
    (".css", Tag::Style, None),
    (".scss", Tag::Style, Some("sass")),
    (".styl", Tag::Style, Some("stylus")),
    (".html", Tag::Template, None),
    (".jade", Tag::Template, Some("jade")),
    (".js", Tag::Script, None),
    (".coffee", Tag::Script, Some("coffee")),
];

/// Built-in extension table as owned entries
pub fn default_extensions() -> Vec<(String, ElementKind)> {
    DEFAULT_EXTENSIONS
        .iter()
        .map(|(ext, tag, lang)| {
            let kind = match lang {
                Some(lang) => ElementKind::with_lang(*tag, *lang),
                None => ElementKind::new(*tag),
            };
            ((*ext).to_string(), kind)
        })
        .collect()
}

/// Lookup of element kinds by file extension
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    by_extension: HashMap<String, ElementKind>,
}

impl ExtensionClassifier {
    /// Create a classifier from `(extension, kind)` entries; later entries win
    pub fn new(entries: impl IntoIterator<Item = (String, ElementKind)>) -> Self {
        Self {
            by_extension: entries.into_iter().collect(),
        }
    }

    /// Classify an extension such as `.scss`.
    ///
    /// Matching is exact and case-sensitive: `.CSS` is not a style sheet.
    pub fn classify(&self, extension: &str) -> Option<&ElementKind> {
        self.by_extension.get(extension)
    }

    /// All entries sorted by extension
    pub fn entries(&self) -> Vec<(&str, &ElementKind)> {
        let mut entries: Vec<_> = self
            .by_extension
            .iter()
            .map(|(ext, kind)| (ext.as_str(), kind))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::new(default_extensions())
    }
}
