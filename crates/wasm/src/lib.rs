use punctual_core::{Educator, Options, Preset, SkipList};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Educator Config
// ============================================================================

/// Configuration accepted by the WASM entry points.
/// Mirrors the NAPI `EducatorConfig` for parity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WasmEducatorConfig {
    #[serde(default)]
    pub preset: Option<i32>,
    #[serde(default)]
    pub attr: Option<String>,
    #[serde(default)]
    pub options: Option<Options>,
    #[serde(default, alias = "skipTags")]
    pub skip_tags: Option<String>,
    #[serde(default, alias = "decodeGlyphs")]
    pub decode_glyphs: Option<bool>,
}

fn parse_config(config: JsValue) -> Result<WasmEducatorConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmEducatorConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

fn build_options(cfg: WasmEducatorConfig) -> Result<Options, JsError> {
    let mut options = match (cfg.options, cfg.attr, cfg.preset) {
        (Some(options), _, _) => options,
        (None, Some(attr), _) => Options::parse(&attr),
        (None, None, Some(code)) => {
            Options::from_preset(Preset::try_from(code).map_err(|e| JsError::new(&e.to_string()))?)
        }
        (None, None, None) => Options::from_preset(Preset::default()),
    };

    if let Some(list) = cfg.skip_tags {
        let skip = SkipList::parse(&list).map_err(|e| JsError::new(&e.to_string()))?;
        options = options.with_skip_list(skip);
    }
    if cfg.decode_glyphs.unwrap_or(false) {
        options.glyphs.decode_entities();
    }
    Ok(options)
}

// ============================================================================
// Entry Points
// ============================================================================

/// Educate an HTML fragment.
///
/// `config` may be `undefined`, or an object with any of `preset`, `attr`,
/// `options`, `skipTags`, and `decodeGlyphs`.
#[wasm_bindgen]
pub fn transform(text: &str, config: JsValue) -> Result<String, JsError> {
    let options = build_options(parse_config(config)?)?;
    Ok(Educator::new(options).transform(text))
}

/// Split HTML into `{ kind, value }` tokens.
#[wasm_bindgen]
pub fn tokenize(text: &str) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&punctual_core::tokenize(text))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// A configured educator kept on the Rust side between calls.
#[wasm_bindgen(js_name = "Educator")]
pub struct WasmEducator {
    inner: Educator,
}

#[wasm_bindgen(js_class = "Educator")]
impl WasmEducator {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmEducator, JsError> {
        let options = build_options(parse_config(config)?)?;
        Ok(Self {
            inner: Educator::new(options),
        })
    }

    pub fn transform(&self, text: &str) -> String {
        self.inner.transform(text)
    }
}
