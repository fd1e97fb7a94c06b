//! Pass 1: comment and line-continuation removal.

use regex::Regex;
use std::sync::LazyLock;

/// One combined pattern so that whichever construct starts first wins:
/// a `//` inside a block comment is part of the block, and a `/*` inside a
/// line comment is part of the line comment.
///
/// - `\` + line terminator
/// - `/* ... */`, shortest match; an unterminated block runs to end of input
/// - `// ...` up to the line terminator, continued by an escaped terminator
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"\\(?:\r\n|\n\r|\n|\r)|/\*(?s:.*?)(?:\*/|\z)|//(?:\\(?:\r\n|\n\r|\n|\r)|[^\n\r])*"
).unwrap());

/// Delete comments and backslash-newline continuations.
///
/// The line terminator that ends a `//` comment is kept, so the code on the
/// next line stays on its own line.
pub fn strip_comments(code: &str) -> String {
    if code.is_empty() { return String::new(); }
    RE_COMMENT.replace_all(code, "").into_owned()
}
