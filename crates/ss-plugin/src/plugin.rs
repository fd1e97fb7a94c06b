//! The transform hook.

use crate::compressor::{CompressMode, Compressor};
use crate::esm::data_to_esm;
use crate::filter::Filter;
use serde::Serialize;
use ss_core::{PluginConfig, Result};
use std::sync::Arc;
use tracing::debug;

pub const PLUGIN_NAME: &str = "vite-plugin-string";

/// Result handed back to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    pub code: String,
    /// Always `None`; no source maps are produced.
    pub map: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShaderStringPlugin {
    config: PluginConfig,
    filter: Filter,
    mode: CompressMode,
}

impl ShaderStringPlugin {
    pub fn new(config: PluginConfig) -> Result<Self> {
        let filter = Filter::new(&config.include, &config.exclude, config.resolve.as_deref())?;
        let mode = CompressMode::from_flag(config.compress);
        Ok(Self { config, filter, mode })
    }

    /// Replace the compressor with a caller-supplied one.
    pub fn with_compressor(mut self, compressor: Arc<dyn Compressor>) -> Self {
        self.mode = CompressMode::Custom(compressor);
        self
    }

    /// Use a prebuilt filter, e.g. one with regex rules.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn mode(&self) -> &CompressMode {
        &self.mode
    }

    /// Transform one module. `Ok(None)` means the id is not ours.
    pub async fn transform(&self, source: &str, id: &str) -> Result<Option<TransformOutput>> {
        if !self.filter.matches(id) {
            debug!(id, "skipped by filter");
            return Ok(None);
        }

        let text = self.mode.apply(source).await?;
        debug!(
            id,
            compressor = self.mode.label(),
            original_len = source.len(),
            output_len = text.len(),
            "transformed shader module"
        );

        Ok(Some(TransformOutput { code: data_to_esm(&text)?, map: None }))
    }
}
