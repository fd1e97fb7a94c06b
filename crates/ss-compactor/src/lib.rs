//! Shader source compactor.
//!
//! Passes, in order:
//! 1. Strip — comments and backslash line continuations
//! 2. Split — break on runs of newlines, dropping empty lines
//! 3. Normalize — trim, collapse whitespace, tighten operator spacing
//! 4. Join — directives keep their own line, code lines are concatenated

pub mod lines;
pub mod pipeline;
pub mod strip;

pub use pipeline::{compress, compress_detailed, CompressionResult};
