//! Input and output records exchanged with the driver

/// Content of an input as delivered by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// Nothing to read (directories and similar placeholders)
    Absent,
    /// Full text content, already decoded
    Buffered(String),
    /// Content only available as a stream; rejected by the aggregator
    Streaming,
}

/// One source file offered to the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// Path relative to the source root, `/`-separated
    pub relative_path: String,
    /// Extension including the leading `.`, or empty
    pub extension: String,
    pub contents: Contents,
}

impl InputRecord {
    /// Build a record, deriving the extension from `relative_path`
    pub fn new(relative_path: impl Into<String>, contents: Contents) -> Self {
        let relative_path = relative_path.into();
        let extension = extension_of(&relative_path).to_string();
        Self {
            relative_path,
            extension,
            contents,
        }
    }

    pub fn buffered(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(relative_path, Contents::Buffered(content.into()))
    }

    pub fn absent(relative_path: impl Into<String>) -> Self {
        Self::new(relative_path, Contents::Absent)
    }

    pub fn streaming(relative_path: impl Into<String>) -> Self {
        Self::new(relative_path, Contents::Streaming)
    }
}

/// One assembled component ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Component name, relative to the output root
    pub path: String,
    /// UTF-8 encoded document
    pub contents: Vec<u8>,
}

impl OutputRecord {
    /// Document text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents).into_owned()
    }
}

/// Split a `/`-separated path into its directory prefix (with trailing `/`)
/// and file name
fn split_file_name(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Extension of the last path segment, including the leading `.`.
///
/// A leading dot alone does not start an extension, so `.babelrc` has none.
pub fn extension_of(path: &str) -> &str {
    let (_, file_name) = split_file_name(path);
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[idx..],
        _ => "",
    }
}

/// Replace the extension of `path` with `extension` (which carries its `.`).
///
/// Paths without an extension get `extension` appended.
pub fn replace_extension(path: &str, extension: &str) -> String {
    let path = path.strip_prefix("./").unwrap_or(path);
    let (dir, file_name) = split_file_name(path);
    let stem_len = file_name.len() - extension_of(file_name).len();
    format!("{dir}{}{extension}", &file_name[..stem_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("foo.html"), ".html");
        assert_eq!(extension_of("src/app/foo.coffee"), ".coffee");
        assert_eq!(extension_of("foo.min.js"), ".js");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".babelrc"), "");
        assert_eq!(extension_of("dir.d/file"), "");
    }

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("foo.html", ".vue"), "foo.vue");
        assert_eq!(replace_extension("app/nav/menu.scss", ".vue"), "app/nav/menu.vue");
        assert_eq!(replace_extension("foo.min.js", ".vue"), "foo.min.vue");
        assert_eq!(replace_extension("./foo.js", ".vue"), "foo.vue");
    }

    #[test]
    fn test_replace_extension_appends_when_missing() {
        assert_eq!(replace_extension("README", ".vue"), "README.vue");
        assert_eq!(replace_extension(".babelrc", ".vue"), ".babelrc.vue");
    }

    #[test]
    fn test_record_constructors() {
        let record = InputRecord::buffered("a/b.jade", "p hi\n");
        assert_eq!(record.extension, ".jade");
        assert_eq!(record.contents, Contents::Buffered("p hi\n".to_string()));

        assert_eq!(InputRecord::absent("a").contents, Contents::Absent);
        assert_eq!(InputRecord::streaming("a.js").contents, Contents::Streaming);
    }

    #[test]
    fn test_output_text() {
        let output = OutputRecord {
            path: "foo.vue".to_string(),
            contents: b"<template>\n</template>\n\n".to_vec(),
        };
        assert_eq!(output.text(), "<template>\n</template>\n\n");
    }
}
