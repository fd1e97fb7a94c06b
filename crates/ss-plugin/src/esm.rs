//! ES module wrapping.

use ss_core::Result;

/// `export default "<text>";` with the text as a JSON string literal.
///
/// U+2028 and U+2029 are valid in JSON strings but not in older JS string
/// literals, so they are escaped too.
pub fn data_to_esm(text: &str) -> Result<String> {
    let literal = serde_json::to_string(text)?
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029");
    Ok(format!("export default {literal};"))
}
