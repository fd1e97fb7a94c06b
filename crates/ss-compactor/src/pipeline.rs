//! Compression pipeline — runs the passes over one source string.

use crate::lines::{self, LineFold};
use crate::strip;
use serde::Serialize;

/// Compression result with statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    /// Negative when the output grew, e.g. a lone directive gains a newline.
    pub reduction_pct: f64,
    pub directive_count: usize,
}

impl CompressionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }
}

fn fold(code: &str) -> LineFold {
    let stripped = strip::strip_comments(code);
    lines::split_lines(&stripped).fold(LineFold::new(), LineFold::push)
}

/// Minify shader source. Never fails: malformed input such as an unterminated
/// block comment is consumed rather than rejected.
pub fn compress(code: &str) -> String {
    fold(code).finish()
}

/// Same as [`compress`], with size statistics.
pub fn compress_detailed(code: &str) -> CompressionResult {
    let original_len = code.len();
    let folded = fold(code);
    let directive_count = folded.directive_count();
    let output = folded.finish();
    let compressed_len = output.len();
    let reduction_pct = if original_len > 0 {
        (original_len as f64 - compressed_len as f64) / original_len as f64 * 100.0
    } else {
        0.0
    };
    tracing::trace!(original_len, compressed_len, directive_count, "compressed shader source");

    CompressionResult {
        output,
        original_len,
        compressed_len,
        reduction_pct,
        directive_count,
    }
}
