#![deny(missing_docs)]
//! Punctual core: HTML-aware smart quotes, dashes, ellipses, and entity conversion.

/// Caller-owned cache of per-preset educators.
pub mod cache;
/// Token-level driver that applies the passes to HTML.
pub mod educator;
/// Core error types.
pub mod error;
/// Presets, option letters, glyphs, and skip-lists.
pub mod options;
/// Individual substitution passes.
pub mod passes;
/// Markup/text tokenizer.
pub mod tokenizer;

pub use cache::PresetCache;
pub use educator::Educator;
pub use error::{ErrorKind, PunctualError};
pub use options::{BacktickMode, DEFAULT_SKIP_TAGS, DashMode, Glyphs, Options, Preset, SkipList};
pub use tokenizer::{Token, TokenKind, tokenize};

/// Transform `text` with a freshly built educator for `preset`.
///
/// Use [`PresetCache`] or keep an [`Educator`] around when transforming many
/// documents.
pub fn transform(text: &str, preset: Preset) -> String {
    Educator::from_preset(preset).transform(text)
}
