#![deny(missing_docs)]
//! Node.js bindings that surface punctual's Rust implementation.

use napi_derive::napi;
use punctual_core::{Educator, Preset, PresetCache};

/// Batch processing types and functions.
pub mod batch;
/// The reusable educator class.
pub mod educator;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
pub use educator::JsEducator;
pub use types::*;

use types::{convert_error, resolve_config};

/// Educates an HTML fragment with a numeric preset (default 4).
#[napi]
pub fn transform(text: String, preset: Option<i32>) -> napi::Result<String> {
    let preset = match preset {
        Some(code) => Preset::try_from(code).map_err(convert_error)?,
        None => Preset::default(),
    };
    Ok(punctual_core::transform(&text, preset))
}

/// Educates an HTML fragment with a full config object.
#[napi(js_name = "transformWithConfig")]
pub fn transform_with_config(text: String, config: Option<EducatorConfig>) -> napi::Result<String> {
    let educator = Educator::new(resolve_config(config)?);
    Ok(educator.transform(&text))
}

/// Splits HTML into markup and text tokens.
#[napi]
pub fn tokenize(text: String) -> Vec<TokenEntry> {
    punctual_core::tokenize(&text)
        .into_iter()
        .map(TokenEntry::from)
        .collect()
}

/// Caches one educator per preset for repeated one-shot calls.
#[napi(js_name = "PresetCache")]
#[derive(Default)]
pub struct JsPresetCache {
    inner: PresetCache,
}

#[napi]
impl JsPresetCache {
    #[napi(constructor)]
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Educates `text` with the cached educator for `preset` (default 4).
    #[napi]
    pub fn transform(&self, text: String, preset: Option<i32>) -> napi::Result<String> {
        let preset = match preset {
            Some(code) => Preset::try_from(code).map_err(convert_error)?,
            None => Preset::default(),
        };
        Ok(self.inner.transform(&text, preset))
    }

    /// Whether the educator for `preset` has already been built.
    #[napi]
    pub fn is_cached(&self, preset: i32) -> napi::Result<bool> {
        let preset = Preset::try_from(preset).map_err(convert_error)?;
        Ok(self.inner.is_cached(preset))
    }
}
