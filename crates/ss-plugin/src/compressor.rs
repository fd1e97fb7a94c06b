//! Compressor selection: built-in, caller-supplied, or none.

use async_trait::async_trait;
use ss_core::{Result, SsError};
use std::fmt;
use std::sync::Arc;

/// Something that minifies source text, possibly asynchronously.
#[async_trait]
pub trait Compressor: Send + Sync {
    async fn compress(&self, code: &str) -> anyhow::Result<String>;
}

/// The built-in shader compactor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompressor;

#[async_trait]
impl Compressor for DefaultCompressor {
    async fn compress(&self, code: &str) -> anyhow::Result<String> {
        Ok(ss_compactor::compress(code))
    }
}

/// Adapts a synchronous closure into a [`Compressor`].
pub struct FnCompressor<F>(pub F);

#[async_trait]
impl<F> Compressor for FnCompressor<F>
where
    F: Fn(&str) -> anyhow::Result<String> + Send + Sync,
{
    async fn compress(&self, code: &str) -> anyhow::Result<String> {
        (self.0)(code)
    }
}

#[derive(Clone, Default)]
pub enum CompressMode {
    Disabled,
    #[default]
    Default,
    Custom(Arc<dyn Compressor>),
}

impl CompressMode {
    pub fn from_flag(compress: bool) -> Self {
        if compress { Self::Default } else { Self::Disabled }
    }

    pub fn custom(compressor: impl Compressor + 'static) -> Self {
        Self::Custom(Arc::new(compressor))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Default => "default",
            Self::Custom(_) => "custom",
        }
    }

    /// Run the selected compressor. Custom failures are passed through as-is.
    pub async fn apply(&self, source: &str) -> Result<String> {
        match self {
            Self::Disabled => Ok(source.to_string()),
            Self::Default => Ok(ss_compactor::compress(source)),
            Self::Custom(c) => c.compress(source).await.map_err(SsError::Compressor),
        }
    }
}

impl fmt::Debug for CompressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
