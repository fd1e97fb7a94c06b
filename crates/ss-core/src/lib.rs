//! Shared types for the shader-string workspace: plugin configuration and errors.

pub mod config;
pub mod error;

pub use config::{PluginConfig, DEFAULT_INCLUDE};
pub use error::{SsError, Result};
