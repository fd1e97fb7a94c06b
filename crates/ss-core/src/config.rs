use serde::{Deserialize, Serialize};

use crate::error::{Result, SsError};

/// File patterns handled when the caller does not supply `include`.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.vs",
    "**/*.fs",
    "**/*.vert",
    "**/*.frag",
    "**/*.glsl",
    "**/*.wgsl",
];

/// Options accepted by the transform hook.
///
/// Fields missing from user input fall back to [`PluginConfig::default`]; a
/// field that is present replaces the default outright, lists included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Glob patterns of module ids to transform.
    pub include: Vec<String>,
    /// Glob patterns of module ids to skip. Wins over `include`.
    pub exclude: Vec<String>,
    /// Run the built-in compressor on matched sources.
    pub compress: bool,
    /// Base directory for relative globs. Defaults to the working directory.
    pub resolve: Option<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
            exclude: Vec::new(),
            compress: true,
            resolve: None,
        }
    }
}

impl PluginConfig {
    /// Parse user options from JSON. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json).map_err(|e| SsError::Config(e.to_string()))?;
        tracing::debug!(
            include = config.include.len(),
            exclude = config.exclude.len(),
            compress = config.compress,
            "parsed plugin options"
        );
        Ok(config)
    }

    pub fn with_include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_resolve(mut self, base: impl Into<String>) -> Self {
        self.resolve = Some(base.into());
        self
    }
}
