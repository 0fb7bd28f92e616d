//! Splits HTML into markup and text fragments without building a tree.
//!
//! Three markup shapes are recognised at every `<`, in priority order:
//! comments (`<!-- ... -->`), processing instructions (`<? ... ?>`), and
//! ordinary tags whose quoted attribute values may themselves contain `>`
//! (as in `<a href="<MTFoo>">`). Anything that does not close is left as text.

use serde::Serialize;

/// Kind of fragment produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Markup: a tag, comment, or processing instruction.
    Tag,
    /// Everything between markup.
    Text,
}

/// A contiguous slice of the input classified as markup or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// Whether this fragment is markup or text.
    pub kind: TokenKind,
    /// The exact source text of the fragment.
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Create a markup token.
    pub fn tag(value: &'a str) -> Self {
        Self {
            kind: TokenKind::Tag,
            value,
        }
    }

    /// Create a text token.
    pub fn text(value: &'a str) -> Self {
        Self {
            kind: TokenKind::Text,
            value,
        }
    }

    /// Returns true for markup tokens.
    pub fn is_tag(&self) -> bool {
        self.kind == TokenKind::Tag
    }

    /// Returns true for text tokens.
    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }

    /// The source text of the token.
    pub fn as_str(&self) -> &'a str {
        self.value
    }
}

/// Split `input` into tag and text tokens.
///
/// The tokens always partition the input: concatenating their values yields
/// `input` again. Empty text runs are never emitted.
///
/// ```
/// use punctual_core::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize(r#"<a title="x > y">link</a>"#);
/// assert_eq!(
///     tokens,
///     vec![
///         Token::tag(r#"<a title="x > y">"#),
///         Token::text("link"),
///         Token::tag("</a>"),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('<') {
        let start = pos + offset;
        match markup_len(&bytes[start..]) {
            Some(len) => {
                if start > text_start {
                    tokens.push(Token::text(&input[text_start..start]));
                }
                tokens.push(Token::tag(&input[start..start + len]));
                pos = start + len;
                text_start = pos;
            }
            None => pos = start + 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Token::text(&input[text_start..]));
    }

    tokens
}

/// Length of the markup starting at `b[0] == b'<'`, if any shape matches.
fn markup_len(b: &[u8]) -> Option<usize> {
    comment_len(b)
        .or_else(|| processing_instruction_len(b))
        .or_else(|| tag_len(b))
}

fn comment_len(b: &[u8]) -> Option<usize> {
    if !b.starts_with(b"<!--") {
        return None;
    }
    find(&b[4..], b"-->").map(|at| 4 + at + 3)
}

fn processing_instruction_len(b: &[u8]) -> Option<usize> {
    if !b.starts_with(b"<?") {
        return None;
    }
    find(&b[2..], b"?>").map(|at| 2 + at + 2)
}

/// Matches `<[/!$]?name` followed by attribute spans and a closing `>`.
///
/// The element name must contain a word boundary somewhere after its first
/// character; the remainder of the name is scanned like attribute text.
fn tag_len(b: &[u8]) -> Option<usize> {
    let mut i = 1;
    if matches!(b.get(i), Some(b'/' | b'!' | b'$')) {
        i += 1;
    }

    let name_start = i;
    while b.get(i).is_some_and(|&c| is_name_byte(c)) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    if !(name_start + 1..=i).any(|at| is_boundary(b, at)) {
        return None;
    }

    loop {
        match *b.get(i)? {
            b'>' => return Some(i + 1),
            quote @ (b'"' | b'\'') => {
                let close = b[i + 1..].iter().position(|&c| c == quote)?;
                i += close + 2;
            }
            _ => i += 1,
        }
    }
}

fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b':'
}

fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_boundary(b: &[u8], at: usize) -> bool {
    let before = at
        .checked_sub(1)
        .and_then(|j| b.get(j))
        .is_some_and(|&c| is_word_byte(c));
    let after = b.get(at).is_some_and(|&c| is_word_byte(c));
    before != after
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
