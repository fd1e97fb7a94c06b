//! Include/exclude filtering of module ids.

use glob::{MatchOptions, Pattern};
use regex::Regex;
use ss_core::{Result, SsError};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single include or exclude rule.
#[derive(Debug, Clone)]
pub enum FilterPattern {
    Glob(Pattern),
    Regex(Regex),
}

impl FilterPattern {
    /// Compile a glob. Relative globs not starting with `**` are anchored at `base`.
    pub fn glob(pattern: &str, base: &str) -> Result<Self> {
        let normalized = normalize_path(pattern);
        let anchored = if normalized.starts_with("**") || is_absolute(&normalized) {
            normalized
        } else {
            join_glob(base, &normalized)
        };
        Pattern::new(&anchored)
            .map(Self::Glob)
            .map_err(|e| SsError::InvalidPattern { pattern: pattern.to_string(), reason: e.to_string() })
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::Glob(p) => p.matches_with(id, MATCH_OPTIONS),
            Self::Regex(re) => re.is_match(id),
        }
    }
}

impl From<Regex> for FilterPattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    // drive letter, e.g. `C:/`
    let has_drive = bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/';
    path.starts_with('/') || has_drive || Path::new(path).is_absolute()
}

fn join_glob(base: &str, pattern: &str) -> String {
    let base = Pattern::escape(&normalize_path(base));
    let pattern = pattern.trim_start_matches("./");
    format!("{}/{}", base.trim_end_matches('/'), pattern)
}

fn resolve_base(resolve: Option<&str>) -> Result<String> {
    let cwd = || std::env::current_dir().map_err(|e| SsError::Other(e.into()));
    let base = match resolve {
        Some(dir) if is_absolute(&normalize_path(dir)) => dir.to_string(),
        Some(dir) => cwd()?.join(dir).to_string_lossy().into_owned(),
        None => cwd()?.to_string_lossy().into_owned(),
    };
    Ok(normalize_path(&base))
}

/// Decides which module ids the hook handles.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    include: Vec<FilterPattern>,
    exclude: Vec<FilterPattern>,
}

impl Filter {
    /// Compile glob lists. `resolve` anchors relative globs, defaulting to the
    /// working directory.
    pub fn new(include: &[String], exclude: &[String], resolve: Option<&str>) -> Result<Self> {
        let base = resolve_base(resolve)?;
        let compile = |patterns: &[String]| -> Result<Vec<FilterPattern>> {
            patterns.iter().map(|p| FilterPattern::glob(p, &base)).collect()
        };
        Ok(Self { include: compile(include)?, exclude: compile(exclude)? })
    }

    pub fn from_patterns(include: Vec<FilterPattern>, exclude: Vec<FilterPattern>) -> Self {
        Self { include, exclude }
    }

    /// Exclusion wins; with no include rules everything else is accepted.
    /// Virtual ids (containing NUL) are always rejected.
    pub fn matches(&self, id: &str) -> bool {
        if id.contains('\0') {
            return false;
        }
        let id = normalize_path(id);
        if self.exclude.iter().any(|p| p.matches(&id)) {
            return false;
        }
        if self.include.iter().any(|p| p.matches(&id)) {
            return true;
        }
        self.include.is_empty()
    }
}
