//! Passes 2-4: line splitting, per-line normalization and the directive-aware join.

use regex::Regex;
use std::sync::LazyLock;

static RE_LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());
static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}|\t").unwrap());
static RE_OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"\s*([{}=*,+/><&|\[\]()\-!;])\s*"
).unwrap());
static RE_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Split on runs of `\n`/`\r`. Blank lines between terminators disappear here.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    RE_LINE_BREAKS.split(text)
}

/// Trim the line and replace its first whitespace run (2+ chars, or a tab)
/// with one space. Later runs are left as they are.
pub fn normalize_line(line: &str) -> String {
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    RE_WHITESPACE_RUN.replace(trimmed, " ").into_owned()
}

/// Remove whitespace on both sides of every operator or punctuation character.
pub fn strip_operator_spacing(line: &str) -> String {
    RE_OPERATOR.replace_all(line, "${1}").into_owned()
}

/// Collapse every run of newlines to a single `\n`.
pub fn collapse_newlines(text: &str) -> String {
    RE_NEWLINE_RUN.replace_all(text, "\n").into_owned()
}

pub fn is_directive(line: &str) -> bool {
    line.starts_with('#')
}

/// Accumulator threaded through the per-line fold.
#[derive(Debug, Default)]
pub struct LineFold {
    fragments: Vec<String>,
    /// Last fragment was a code line, so a directive needs a newline first.
    pending_separator: bool,
    directives: usize,
}

impl LineFold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize one raw line and append its fragments.
    pub fn push(mut self, raw: &str) -> Self {
        let line = normalize_line(raw);
        if is_directive(&line) {
            if self.pending_separator {
                self.fragments.push("\n".into());
            }
            self.fragments.push(line);
            self.fragments.push("\n".into());
            self.pending_separator = false;
            self.directives += 1;
        } else {
            self.fragments.push(strip_operator_spacing(&line));
            self.pending_separator = true;
        }
        self
    }

    pub fn pending_separator(&self) -> bool {
        self.pending_separator
    }

    pub fn directive_count(&self) -> usize {
        self.directives
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Join all fragments and collapse newline runs.
    pub fn finish(self) -> String {
        collapse_newlines(&self.fragments.concat())
    }
}
