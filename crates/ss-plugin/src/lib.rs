//! Bundler transform hook that turns shader files into string modules.
//!
//! A module id passes through the include/exclude [`Filter`], its source is
//! optionally minified by a [`Compressor`], and the result is wrapped as an ES
//! module whose default export is the source text.

pub mod compressor;
pub mod esm;
pub mod filter;
pub mod plugin;

pub use compressor::{CompressMode, Compressor, DefaultCompressor, FnCompressor};
pub use esm::data_to_esm;
pub use filter::{Filter, FilterPattern};
pub use plugin::{ShaderStringPlugin, TransformOutput, PLUGIN_NAME};

#[cfg(test)]
mod tests;
