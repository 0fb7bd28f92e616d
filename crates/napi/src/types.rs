//! NAPI-exposed data structures and config resolution.

use napi::{Error, Status};
use napi_derive::napi;
use punctual_core::{Options, Preset, PunctualError, SkipList, Token, TokenKind};
use serde_json::Value as JsonValue;

/// Options passed to the educator constructor and the one-shot helpers.
///
/// Sources are consulted in order: `options`, then `attr`, then `preset`.
/// With none of them set the `intl` preset (4) is used.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct EducatorConfig {
    /// Numeric preset: 0, 1, 2, 3, 4, or -1 to stupefy.
    pub preset: Option<i32>,
    /// Attribute string: a preset code or a run of option letters (`"qbde"`).
    pub attr: Option<String>,
    /// Full configuration object (camelCase fields, all optional).
    pub options: Option<JsonValue>,
    /// `|`-separated element names whose content is left untouched.
    pub skip_tags: Option<String>,
    /// Emit literal characters instead of character references.
    pub decode_glyphs: Option<bool>,
}

impl EducatorConfig {
    /// Resolve into core options.
    pub(crate) fn resolve(self) -> napi::Result<Options> {
        let mut options = if let Some(value) = self.options {
            serde_json::from_value::<Options>(value).map_err(|e| {
                Error::new(Status::InvalidArg, format!("Invalid educator options: {}", e))
            })?
        } else if let Some(attr) = self.attr.as_deref() {
            Options::parse(attr)
        } else if let Some(code) = self.preset {
            Options::from_preset(Preset::try_from(code).map_err(convert_error)?)
        } else {
            Options::from_preset(Preset::default())
        };

        if let Some(list) = self.skip_tags.as_deref() {
            options = options.with_skip_list(SkipList::parse(list).map_err(convert_error)?);
        }
        if self.decode_glyphs.unwrap_or(false) {
            options.glyphs.decode_entities();
        }
        Ok(options)
    }
}

/// Resolve an optional config, defaulting to the `intl` preset.
pub(crate) fn resolve_config(config: Option<EducatorConfig>) -> napi::Result<Options> {
    config.unwrap_or_default().resolve()
}

/// A markup or text run returned by `tokenize`.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// `"tag"` or `"text"`.
    pub kind: String,
    /// The exact source text of the token.
    pub value: String,
}

impl From<Token<'_>> for TokenEntry {
    fn from(token: Token<'_>) -> Self {
        let kind = match token.kind {
            TokenKind::Tag => "tag",
            TokenKind::Text => "text",
        };
        Self {
            kind: kind.to_string(),
            value: token.value.to_string(),
        }
    }
}

/// Map a core error onto an `InvalidArg` NAPI error.
pub(crate) fn convert_error(err: PunctualError) -> Error {
    Error::new(Status::InvalidArg, format!("{} error: {}", err.kind(), err))
}
