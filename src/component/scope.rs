//! Detection of the `/* vue ... scoped */` first-line marker

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static SCOPED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\*.*vue.*scoped.*\*/$").unwrap());

/// Returns the first line of `content` without its line terminator
fn first_line(content: &str) -> &str {
    match content.find('\n') {
        Some(end) => content[..end].strip_suffix('\r').unwrap_or(&content[..end]),
        None => content,
    }
}

/// Check whether a block asks to be emitted with the `scoped` attribute.
///
/// Only a first line consisting entirely of one block comment that
/// mentions `vue` and then `scoped` counts, e.g. `/* vue:scoped */`.
pub fn is_scoped(content: &str) -> bool {
    SCOPED_MARKER.is_match(first_line(content))
}
