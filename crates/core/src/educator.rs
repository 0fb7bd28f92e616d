//! Token-level driver that applies the substitution passes to HTML.

use crate::options::{BacktickMode, DashMode, Options, Preset};
use crate::passes;
use crate::tokenizer::{TokenKind, tokenize};
use std::borrow::Cow;

/// A configured punctuation educator.
///
/// The configuration is read-only once built, so one educator can be shared
/// between threads and reused for any number of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Educator {
    options: Options,
}

impl Educator {
    /// Create an educator from explicit options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Create an educator for a preset.
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(Options::from_preset(preset))
    }

    /// The configuration in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Educate the text of an HTML fragment, leaving markup and the content
    /// of skip-listed elements untouched.
    ///
    /// ```
    /// use punctual_core::{Educator, Preset};
    ///
    /// let educator = Educator::from_preset(Preset::EmDash);
    /// assert_eq!(
    ///     educator.transform("<p>\"Hi\" -- <code>\"x\"</code></p>"),
    ///     "<p>&#8220;Hi&#8221; &#8212; <code>\"x\"</code></p>"
    /// );
    /// ```
    pub fn transform(&self, input: &str) -> String {
        if self.options.do_nothing {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() + input.len() / 8);
        let mut verbatim = false;
        let mut context = None;

        for token in tokenize(input) {
            match token.kind {
                TokenKind::Tag => {
                    out.push_str(token.value);
                    if let Some(entering) = self.verbatim_transition(token.value) {
                        verbatim = entering;
                    }
                }
                TokenKind::Text if verbatim => {
                    out.push_str(token.value);
                    context = token.value.chars().next_back().or(context);
                }
                TokenKind::Text => {
                    let (educated, next) = self.educate_text(token.value, context);
                    out.push_str(&educated);
                    context = next;
                }
            }
        }

        out
    }

    /// Educate a single text token.
    ///
    /// `context` is the last character of the previous text token (`None` at
    /// the start of a document). Returns the educated text and the context for
    /// the next token, which is the last character of `text` before any
    /// substitution.
    pub fn educate_text<'a>(
        &self,
        text: &'a str,
        context: Option<char>,
    ) -> (Cow<'a, str>, Option<char>) {
        let next = text.chars().next_back().or(context);
        if self.options.do_nothing {
            return (Cow::Borrowed(text), next);
        }

        let options = &self.options;
        let glyphs = &options.glyphs;

        let mut text = step(Cow::Borrowed(text), passes::process_escapes);

        if options.convert_quot {
            text = step(text, passes::convert_quot_entities);
        }

        if options.dashes != DashMode::Off {
            text = step(text, |s| passes::educate_dashes(s, options.dashes, glyphs));
        }

        if options.ellipses {
            text = step(text, |s| passes::educate_ellipses(s, &glyphs.ellipsis));
        }

        if options.backticks != BacktickMode::Off {
            text = step(text, |s| passes::educate_backticks(s, glyphs));
            if options.backticks == BacktickMode::DoubleAndSingle {
                text = step(text, |s| passes::educate_single_backticks(s, glyphs));
            }
        }

        if options.quotes {
            text = match passes::lone_quote(&text, context, glyphs) {
                Some(glyph) => Cow::Owned(glyph.to_string()),
                None => step(text, |s| passes::educate_quotes(s, glyphs)),
            };
        }

        if options.intl {
            text = step(text, passes::educate_intl);
        }

        if options.stupefy {
            text = step(text, |s| passes::stupefy(s, glyphs));
        }

        (text, next)
    }

    /// `Some(true)` when `tag` opens a skip-listed element, `Some(false)` when
    /// it closes one, `None` for any other markup.
    fn verbatim_transition(&self, tag: &str) -> Option<bool> {
        let rest = tag.strip_prefix('<')?;
        let (closing, rest) = match rest.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let name_len = rest
            .bytes()
            .take_while(|&b| b.is_ascii_alphanumeric() || b == b'-' || b == b':')
            .count();
        let (name, after) = rest.split_at(name_len);
        if name.is_empty() || !after.starts_with(|c: char| c.is_ascii_whitespace() || c == '>') {
            return None;
        }
        if !self.options.skip.contains(name) {
            return None;
        }
        if !closing && tag.ends_with("/>") {
            return None;
        }

        if closing {
            log::debug!("leaving verbatim element <{}>", name);
        } else {
            log::debug!("entering verbatim element <{}>", name);
        }
        Some(!closing)
    }
}

impl From<Options> for Educator {
    fn from(options: Options) -> Self {
        Self::new(options)
    }
}

impl From<Preset> for Educator {
    fn from(preset: Preset) -> Self {
        Self::from_preset(preset)
    }
}

/// Run one pass, keeping the current buffer when the pass changes nothing.
fn step<'a>(text: Cow<'a, str>, pass: impl FnOnce(&str) -> Cow<'_, str>) -> Cow<'a, str> {
    let replaced = match pass(&text) {
        Cow::Owned(next) => Some(next),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(next) => Cow::Owned(next),
        None => text,
    }
}
