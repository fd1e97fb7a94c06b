use napi_derive::napi;
use ss_core::{PluginConfig, SsError, DEFAULT_INCLUDE};
use ss_plugin::ShaderStringPlugin;

fn to_napi(err: SsError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

#[napi]
pub fn ping() -> String {
    format!("shader-string v{}", env!("CARGO_PKG_VERSION"))
}

// ========== Compactor ==========

#[napi]
pub fn compress(code: String) -> String {
    ss_compactor::compress(&code)
}

#[napi(object)]
pub struct CompressionInfo {
    pub compressed: String,
    pub original_len: u32,
    pub compressed_len: u32,
    pub directive_count: u32,
    pub ratio: f64,
}

#[napi]
pub fn compress_detailed(code: String) -> CompressionInfo {
    let r = ss_compactor::compress_detailed(&code);
    CompressionInfo {
        original_len: r.original_len as u32,
        compressed_len: r.compressed_len as u32,
        directive_count: r.directive_count as u32,
        ratio: r.ratio(),
        compressed: r.output,
    }
}

// ========== Transform hook ==========

#[napi]
pub fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect()
}

#[napi(object)]
pub struct TransformResult {
    pub code: String,
    pub map: Option<String>,
}

/// `options` is the plugin options object serialized as JSON.
#[napi]
pub async fn transform(source: String, id: String, options: Option<String>) -> napi::Result<Option<TransformResult>> {
    let config = PluginConfig::from_json(options.as_deref().unwrap_or("")).map_err(to_napi)?;
    let plugin = ShaderStringPlugin::new(config).map_err(to_napi)?;
    let output = plugin.transform(&source, &id).await.map_err(to_napi)?;
    Ok(output.map(|o| TransformResult { code: o.code, map: o.map }))
}
