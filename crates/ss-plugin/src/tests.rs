use crate::*;
use regex::Regex;
use ss_core::{PluginConfig, SsError};
use std::sync::Arc;

fn plugin(config: PluginConfig) -> ShaderStringPlugin {
    ShaderStringPlugin::new(config.with_resolve("/project")).unwrap()
}

fn default_filter() -> Filter {
    let c = PluginConfig::default();
    Filter::new(&c.include, &c.exclude, Some("/project")).unwrap()
}

struct Upper;

#[async_trait::async_trait]
impl Compressor for Upper {
    async fn compress(&self, code: &str) -> anyhow::Result<String> {
        tokio::task::yield_now().await;
        Ok(code.to_uppercase())
    }
}

// ========== Filter ==========

#[test]
fn test_filter_default_extensions() {
    let f = default_filter();
    for id in ["/project/src/a.vs", "/project/a.fs", "/x/y/z.vert", "/b.frag", "/project/lib/c.glsl", "/project/d.wgsl"] {
        assert!(f.matches(id), "{id} should match");
    }
    assert!(!f.matches("/project/src/main.js"));
    assert!(!f.matches("/project/src/shader.wgsl.map"));
}

#[test]
fn test_filter_relative_id() {
    assert!(default_filter().matches("a.glsl"));
}

#[test]
fn test_filter_windows_id() {
    assert!(default_filter().matches("C:\\project\\shaders\\blur.frag"));
}

#[test]
fn test_filter_rejects_virtual_ids() {
    assert!(!default_filter().matches("\0virtual:shader.glsl"));
}

#[test]
fn test_filter_exclude_wins() {
    let include = vec!["**/*.glsl".to_string()];
    let exclude = vec!["**/vendor/**".to_string()];
    let f = Filter::new(&include, &exclude, Some("/project")).unwrap();
    assert!(f.matches("/project/src/a.glsl"));
    assert!(!f.matches("/project/vendor/lib/a.glsl"));
}

#[test]
fn test_filter_empty_include_accepts_all() {
    let exclude = vec!["**/*.js".to_string()];
    let f = Filter::new(&[], &exclude, Some("/project")).unwrap();
    assert!(f.matches("/project/anything.txt"));
    assert!(!f.matches("/project/main.js"));
}

#[test]
fn test_filter_relative_glob_anchored() {
    let include = vec!["src/*.glsl".to_string()];
    let f = Filter::new(&include, &[], Some("/project")).unwrap();
    assert!(f.matches("/project/src/a.glsl"));
    assert!(!f.matches("/other/src/a.glsl"));
    assert!(!f.matches("/project/src/nested/a.glsl"));
}

#[test]
fn test_filter_dot_slash_glob() {
    let include = vec!["./shaders/*.wgsl".to_string()];
    let f = Filter::new(&include, &[], Some("/project/")).unwrap();
    assert!(f.matches("/project/shaders/sky.wgsl"));
}

#[test]
fn test_filter_base_with_glob_chars() {
    let include = vec!["*.glsl".to_string()];
    let f = Filter::new(&include, &[], Some("/work[1]")).unwrap();
    assert!(f.matches("/work[1]/a.glsl"));
    assert!(!f.matches("/work1/a.glsl"));
}

#[test]
fn test_filter_absolute_glob_untouched() {
    let include = vec!["/assets/*.frag".to_string()];
    let f = Filter::new(&include, &[], Some("/project")).unwrap();
    assert!(f.matches("/assets/a.frag"));
    assert!(!f.matches("/project/assets/a.frag"));
}

#[test]
fn test_filter_invalid_glob() {
    let include = vec!["a/***".to_string()];
    let err = Filter::new(&include, &[], Some("/project")).unwrap_err();
    match err {
        SsError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "a/***"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_filter_regex_patterns() {
    let f = Filter::from_patterns(
        vec![Regex::new(r"\.shader$").unwrap().into()],
        vec![FilterPattern::Regex(Regex::new(r"/test/").unwrap())],
    );
    assert!(f.matches("/project/water.shader"));
    assert!(!f.matches("/project/test/water.shader"));
    assert!(!f.matches("/project/water.glsl"));
}

// ========== ESM ==========

#[test]
fn test_esm_simple() {
    assert_eq!(data_to_esm("float a;").unwrap(), r#"export default "float a;";"#);
}

#[test]
fn test_esm_escapes() {
    assert_eq!(
        data_to_esm("#define A \"x\"\n").unwrap(),
        r##"export default "#define A \"x\"\n";"##
    );
}

#[test]
fn test_esm_line_separators() {
    assert_eq!(
        data_to_esm("a\u{2028}b\u{2029}c").unwrap(),
        r#"export default "a\u2028b\u2029c";"#
    );
}

// ========== Compressor ==========

#[tokio::test]
async fn test_mode_disabled_passthrough() {
    let out = CompressMode::Disabled.apply("float  a ;").await.unwrap();
    assert_eq!(out, "float  a ;");
}

#[tokio::test]
async fn test_mode_default() {
    let out = CompressMode::from_flag(true).apply("float a = 1.0; // one").await.unwrap();
    assert_eq!(out, "float a=1.0;");
}

#[tokio::test]
async fn test_default_compressor_trait() {
    let out = DefaultCompressor.compress("a + b;").await.unwrap();
    assert_eq!(out, "a+b;");
}

#[tokio::test]
async fn test_fn_compressor() {
    let mode = CompressMode::custom(FnCompressor(|s: &str| -> anyhow::Result<String> { Ok(s.trim().to_string()) }));
    assert_eq!(mode.apply("  x  ").await.unwrap(), "x");
    assert_eq!(mode.label(), "custom");
}

#[tokio::test]
async fn test_custom_error_propagates() {
    let mode = CompressMode::custom(FnCompressor(|_: &str| -> anyhow::Result<String> { Err(anyhow::anyhow!("rejected")) }));
    let err = mode.apply("x").await.unwrap_err();
    assert!(matches!(err, SsError::Compressor(_)));
    assert_eq!(err.to_string(), "rejected");
}

#[test]
fn test_mode_labels() {
    assert_eq!(CompressMode::from_flag(false).label(), "disabled");
    assert_eq!(CompressMode::default().label(), "default");
    assert_eq!(format!("{:?}", CompressMode::Disabled), "disabled");
}

// ========== Plugin ==========

#[test]
fn test_plugin_name() {
    assert_eq!(plugin(PluginConfig::default()).name(), "vite-plugin-string");
}

#[test]
fn test_plugin_invalid_pattern() {
    let config = PluginConfig::default().with_exclude(["a/***"]);
    assert!(ShaderStringPlugin::new(config).is_err());
}

#[test]
fn test_plugin_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShaderStringPlugin>();
}

#[tokio::test]
async fn test_transform_compresses() {
    let p = plugin(PluginConfig::default());
    let out = p.transform("float a = 1.0; // x\n", "/project/a.glsl").await.unwrap().unwrap();
    assert_eq!(out.code, r#"export default "float a=1.0;";"#);
    assert!(out.map.is_none());
}

#[tokio::test]
async fn test_transform_keeps_directive_lines() {
    let p = plugin(PluginConfig::default());
    let out = p.transform("#define A 1\n  float a = A;\n", "/project/a.frag").await.unwrap().unwrap();
    assert_eq!(out.code, r##"export default "#define A 1\nfloat a=A;";"##);
}

#[tokio::test]
async fn test_transform_skips_unmatched() {
    let p = plugin(PluginConfig::default());
    assert!(p.transform("let a = 1;", "/project/main.ts").await.unwrap().is_none());
}

#[tokio::test]
async fn test_transform_without_compress() {
    let p = plugin(PluginConfig::default().with_compress(false));
    let out = p.transform("float a = 1.0; // x\n", "/project/a.glsl").await.unwrap().unwrap();
    assert_eq!(out.code, r#"export default "float a = 1.0; // x\n";"#);
}

#[tokio::test]
async fn test_transform_custom_compressor() {
    let p = plugin(PluginConfig::default()).with_compressor(Arc::new(Upper));
    assert_eq!(p.mode().label(), "custom");
    let out = p.transform("float a;", "/project/a.wgsl").await.unwrap().unwrap();
    assert_eq!(out.code, r#"export default "FLOAT A;";"#);
}

#[tokio::test]
async fn test_transform_custom_error() {
    let failing = FnCompressor(|_: &str| -> anyhow::Result<String> { Err(anyhow::anyhow!("shader rejected")) });
    let p = plugin(PluginConfig::default()).with_compressor(Arc::new(failing));
    let err = p.transform("float a;", "/project/a.wgsl").await.unwrap_err();
    assert_eq!(err.to_string(), "shader rejected");
}

#[tokio::test]
async fn test_transform_custom_filter() {
    let filter = Filter::from_patterns(vec![Regex::new(r"\.shader$").unwrap().into()], vec![]);
    let p = plugin(PluginConfig::default()).with_filter(filter);
    assert!(p.transform("x;", "/project/a.glsl").await.unwrap().is_none());
    assert!(p.transform("x;", "/project/a.shader").await.unwrap().is_some());
}

#[tokio::test]
async fn test_transform_concurrent() {
    let p = Arc::new(plugin(PluginConfig::default()));
    let (a, b) = tokio::join!(
        p.transform("a = 1;", "/project/a.glsl"),
        p.transform("#version 450\nb = 2;", "/project/b.glsl"),
    );
    assert_eq!(a.unwrap().unwrap().code, r#"export default "a=1;";"#);
    assert_eq!(b.unwrap().unwrap().code, r##"export default "#version 450\nb=2;";"##);
}

#[test]
fn test_transform_output_serializes() {
    let out = TransformOutput { code: "export default \"\";".into(), map: None };
    let json = serde_json::to_value(&out).unwrap();
    assert!(json["map"].is_null());
}
