//! The reusable educator class exposed to JavaScript.

use crate::batch::{BatchInput, BatchOptions, BatchProcessingResult, run_batch};
use crate::types::{EducatorConfig, resolve_config};
use napi_derive::napi;
use punctual_core::Educator;

/// An educator built once from a config and reused across documents.
#[napi(js_name = "Educator")]
pub struct JsEducator {
    pub(crate) inner: Educator,
}

#[napi]
impl JsEducator {
    #[napi(constructor)]
    /// Creates an educator; fails on an unknown preset or bad options.
    pub fn new(config: Option<EducatorConfig>) -> napi::Result<Self> {
        Ok(Self {
            inner: Educator::new(resolve_config(config)?),
        })
    }

    /// Educates one HTML fragment.
    #[napi]
    pub fn transform(&self, text: String) -> String {
        self.inner.transform(&text)
    }

    /// Educates many documents in parallel, preserving input order.
    #[napi]
    pub fn transform_batch(
        &self,
        inputs: Vec<BatchInput>,
        options: Option<BatchOptions>,
    ) -> BatchProcessingResult {
        run_batch(&self.inner, inputs, options)
    }

    /// The resolved configuration as JSON.
    #[napi(getter)]
    pub fn options(&self) -> napi::Result<serde_json::Value> {
        serde_json::to_value(self.inner.options())
            .map_err(|e| napi::Error::from_reason(format!("Failed to serialize options: {}", e)))
    }
}
