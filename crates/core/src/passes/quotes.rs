//! Curls straight quotes using only the characters around them.
//!
//! Rules run as separate scans in a fixed order and each scan sees the output
//! of the previous one, including glyphs inserted earlier:
//!
//! 1. a quote at the very start followed by punctuation at a non-boundary closes;
//! 2. `"'` and `'"` before a word character open both quotes;
//! 3. `'` before two digits and an `s` closes (`'80s`);
//! 4. a quote after whitespace, `&nbsp;`, or a dash and before a word character opens;
//! 5. a quote after anything but whitespace, `[`, `{`, `(`, or `-` closes, as
//!    does a quote followed by whitespace (or, for `'`, a word-final `s`);
//! 6. whatever is left opens.
//!
//! Character classes are ASCII, matching bytes rather than characters, so any
//! non-ASCII character counts as "not whitespace, not a word character".

use crate::options::Glyphs;
use std::borrow::Cow;

/// Text that, directly before a quote, marks the quote as opening.
const OPENING_PREFIXES: [&[u8]; 8] = [
    b"&nbsp;", b"--", b"&mdash;", b"&ndash;", b"&#8211;", b"&#8212;", b"&#x2013;", b"&#x2014;",
];

/// Classify a token that consists of a single quote character.
///
/// Such tokens appear when a quote sits alone between two tags; the last
/// character of the previous text token decides the direction. Returns
/// `None` when `text` is not a lone quote.
pub fn lone_quote<'g>(text: &str, context: Option<char>, glyphs: &'g Glyphs) -> Option<&'g str> {
    let closes = context.is_some_and(|c| !c.is_ascii() || !is_space(c as u8));
    let glyph = match (text, closes) {
        ("'", true) => &glyphs.single_close,
        ("'", false) => &glyphs.single_open,
        ("\"", true) => &glyphs.double_close,
        ("\"", false) => &glyphs.double_open,
        _ => return None,
    };
    Some(glyph.as_str())
}

/// Replace every straight quote in `text` with an opening or closing glyph.
///
/// ```
/// use punctual_core::options::Glyphs;
/// use punctual_core::passes::educate_quotes;
///
/// let out = educate_quotes("\"Isn't this fun?\"", &Glyphs::default());
/// assert_eq!(out, "&#8220;Isn&#8217;t this fun?&#8221;");
/// ```
pub fn educate_quotes<'a>(text: &'a str, glyphs: &Glyphs) -> Cow<'a, str> {
    if !text.contains(['\'', '"']) {
        return Cow::Borrowed(text);
    }
    let sq_open = glyphs.single_open.as_str();
    let sq_close = glyphs.single_close.as_str();
    let dq_open = glyphs.double_open.as_str();
    let dq_close = glyphs.double_close.as_str();

    let mut text = Cow::Borrowed(text);
    text = apply(text, |s| close_leading(s, b'\'', sq_close));
    text = apply(text, |s| close_leading(s, b'"', dq_close));
    text = apply(text, |s| open_nested(s, [b'"', b'\''], [dq_open, sq_open]));
    text = apply(text, |s| open_nested(s, [b'\'', b'"'], [sq_open, dq_open]));
    text = apply(text, |s| close_decades(s, sq_close));

    text = apply(text, |s| open_after_space(s, b'\'', sq_open));
    text = apply(text, |s| close_after_word(s, b'\'', sq_close, true));
    text = apply(text, |s| replace_remaining(s, b'\'', sq_open));

    text = apply(text, |s| open_after_space(s, b'"', dq_open));
    text = apply(text, |s| close_after_word(s, b'"', dq_close, false));
    apply(text, |s| replace_remaining(s, b'"', dq_open))
}

fn apply<'a>(text: Cow<'a, str>, step: impl FnOnce(&str) -> Option<String>) -> Cow<'a, str> {
    match step(&text) {
        Some(next) => Cow::Owned(next),
        None => text,
    }
}

/// Rebuild `text` with the single-byte quotes at each index replaced.
/// Indices must be ascending and point at ASCII bytes.
fn splice(text: &str, edits: Vec<(usize, &str)>) -> Option<String> {
    if edits.is_empty() {
        return None;
    }
    let extra: usize = edits.iter().map(|(_, glyph)| glyph.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut last = 0;
    for (at, glyph) in edits {
        out.push_str(&text[last..at]);
        out.push_str(glyph);
        last = at + 1;
    }
    out.push_str(&text[last..]);
    Some(out)
}

fn close_leading(text: &str, quote: u8, glyph: &str) -> Option<String> {
    let b = text.as_bytes();
    let closes = b.first() == Some(&quote)
        && b.get(1).is_some_and(|&c| is_punct(c))
        && !is_boundary(b, 2);
    if closes {
        splice(text, vec![(0, glyph)])
    } else {
        None
    }
}

fn open_nested(text: &str, pair: [u8; 2], glyphs: [&str; 2]) -> Option<String> {
    let b = text.as_bytes();
    let mut edits = Vec::new();
    let mut i = 0;
    while i + 1 < b.len() {
        if b[i] == pair[0] && b[i + 1] == pair[1] && is_word_at(b, i + 2) {
            edits.push((i, glyphs[0]));
            edits.push((i + 1, glyphs[1]));
            i += 2;
        } else {
            i += 1;
        }
    }
    splice(text, edits)
}

fn close_decades(text: &str, glyph: &str) -> Option<String> {
    let b = text.as_bytes();
    let edits = positions(b, b'\'')
        .filter(|&i| {
            b.get(i + 1).is_some_and(u8::is_ascii_digit)
                && b.get(i + 2).is_some_and(u8::is_ascii_digit)
                && b.get(i + 3) == Some(&b's')
        })
        .map(|i| (i, glyph))
        .collect();
    splice(text, edits)
}

fn open_after_space(text: &str, quote: u8, glyph: &str) -> Option<String> {
    let b = text.as_bytes();
    let edits = positions(b, quote)
        .filter(|&i| is_word_at(b, i + 1) && opens_after(&b[..i]))
        .map(|i| (i, glyph))
        .collect();
    splice(text, edits)
}

fn opens_after(before: &[u8]) -> bool {
    before.last().is_some_and(|&c| is_space(c))
        || OPENING_PREFIXES
            .iter()
            .any(|prefix| before.ends_with(prefix))
}

/// A quote closes when the byte before it is "closing context". With no such
/// byte it still closes if followed by whitespace, or, when `possessive` is
/// set, by an `s` that ends a word (`<i>Custer</i>'s`).
///
/// A matched context byte is consumed together with its quote, so it cannot
/// serve as context for the next quote (`a''` closes only the first).
fn close_after_word(text: &str, quote: u8, glyph: &str, possessive: bool) -> Option<String> {
    let b = text.as_bytes();
    let mut edits = Vec::new();
    let mut i = 0;
    while i < b.len() {
        if is_closing_context(b[i]) && b.get(i + 1) == Some(&quote) {
            edits.push((i + 1, glyph));
            i += 2;
            continue;
        }
        if b[i] == quote {
            let next = b.get(i + 1).copied();
            let before_space = next.is_some_and(is_space);
            let before_final_s =
                possessive && matches!(next, Some(b's' | b'S')) && !is_word_at(b, i + 2);
            if before_space || before_final_s {
                edits.push((i, glyph));
            }
        }
        i += 1;
    }
    splice(text, edits)
}

fn replace_remaining(text: &str, quote: u8, glyph: &str) -> Option<String> {
    let b = text.as_bytes();
    splice(text, positions(b, quote).map(|i| (i, glyph)).collect())
}

fn positions(b: &[u8], quote: u8) -> impl Iterator<Item = usize> + '_ {
    b.iter()
        .enumerate()
        .filter(move |&(_, &c)| c == quote)
        .map(|(i, _)| i)
}

fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn is_word(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_word_at(b: &[u8], at: usize) -> bool {
    b.get(at).is_some_and(|&c| is_word(c))
}

/// ASCII punctuation other than `&`, which starts character references.
fn is_punct(c: u8) -> bool {
    c.is_ascii_punctuation() && c != b'&'
}

fn is_closing_context(c: u8) -> bool {
    !matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b'[' | b'{' | b'(' | b'-')
}

fn is_boundary(b: &[u8], at: usize) -> bool {
    let before = at.checked_sub(1).is_some_and(|j| is_word_at(b, j));
    before != is_word_at(b, at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn educate(text: &str) -> String {
        educate_quotes(text, &Glyphs::default()).into_owned()
    }

    #[test]
    fn apostrophe_and_pair() {
        assert_eq!(
            educate("Isn't this \"fun\"?"),
            "Isn&#8217;t this &#8220;fun&#8221;?"
        );
    }

    #[test]
    fn whole_sentence_in_quotes() {
        assert_eq!(
            educate("\"Isn't this fun?\""),
            "&#8220;Isn&#8217;t this fun?&#8221;"
        );
    }

    #[test]
    fn nested_quotes_open_together() {
        assert_eq!(
            educate("\"'Quoted' words in a larger quote.\""),
            "&#8220;&#8216;Quoted&#8217; words in a larger quote.&#8221;"
        );
        assert_eq!(
            educate("'\"Inner\" outer'"),
            "&#8216;&#8220;Inner&#8221; outer&#8217;"
        );
    }

    #[test]
    fn decade_abbreviation_closes() {
        assert_eq!(educate("the '80s"), "the &#8217;80s");
        assert_eq!(educate("'90s kids"), "&#8217;90s kids");
    }

    #[test]
    fn three_digits_are_not_a_decade() {
        assert_eq!(educate("the '800s"), "the &#8216;800s");
    }

    #[test]
    fn opening_after_whitespace_and_closing_after_word() {
        assert_eq!(
            educate("He said 'hello' twice"),
            "He said &#8216;hello&#8217; twice"
        );
        assert_eq!(educate("rock 'n' roll"), "rock &#8216;n&#8217; roll");
    }

    #[test]
    fn opening_after_dashes_and_entities() {
        assert_eq!(educate("--'Tis"), "--&#8216;Tis");
        assert_eq!(educate("&#8212;'Tis"), "&#8212;&#8216;Tis");
        assert_eq!(educate("&mdash;\"Yes"), "&mdash;&#8220;Yes");
        assert_eq!(educate("a&nbsp;'b'"), "a&nbsp;&#8216;b&#8217;");
        assert_eq!(educate("&#x2013;'x"), "&#x2013;&#8216;x");
    }

    #[test]
    fn possessive_after_markup_closes() {
        assert_eq!(educate("'s Last Stand."), "&#8217;s Last Stand.");
        assert_eq!(educate("'S"), "&#8217;S");
    }

    #[test]
    fn quote_before_whitespace_closes() {
        assert_eq!(educate("\" he said"), "&#8221; he said");
        assert_eq!(educate("' then"), "&#8217; then");
    }

    #[test]
    fn leading_quote_before_punctuation_closes() {
        assert_eq!(educate("\"!\""), "&#8221;!&#8221;");
        assert_eq!(educate("'?"), "&#8217;?");
    }

    #[test]
    fn leading_quote_before_punctuated_word_opens() {
        // `.` is followed by a word character, so the leading-quote rule
        // does not apply and the quote falls through to the default.
        assert_eq!(educate("\".net\""), "&#8220;.net&#8221;");
    }

    #[test]
    fn brackets_do_not_close() {
        assert_eq!(educate("(\"quoted\")"), "(&#8220;quoted&#8221;)");
        assert_eq!(educate("['x']"), "[&#8216;x&#8217;]");
    }

    #[test]
    fn consumed_context_is_not_reused() {
        assert_eq!(educate("a''"), "a&#8217;&#8216;");
    }

    #[test]
    fn non_ascii_context_closes() {
        assert_eq!(educate("caf\u{e9}'s"), "caf\u{e9}&#8217;s");
    }

    #[test]
    fn text_without_quotes_is_borrowed() {
        assert!(matches!(
            educate_quotes("no quotes", &Glyphs::default()),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn lone_quote_uses_previous_context() {
        let g = Glyphs::default();
        assert_eq!(lone_quote("'", Some('d'), &g), Some("&#8217;"));
        assert_eq!(lone_quote("'", Some(' '), &g), Some("&#8216;"));
        assert_eq!(lone_quote("\"", None, &g), Some("&#8220;"));
        assert_eq!(lone_quote("\"", Some('\u{e9}'), &g), Some("&#8221;"));
        assert_eq!(lone_quote("''", Some('d'), &g), None);
    }

    #[test]
    fn custom_glyphs_are_used() {
        let g = Glyphs::default().decoded();
        assert_eq!(
            educate_quotes("\"Don't\"", &g),
            "\u{201c}Don\u{2019}t\u{201d}"
        );
    }
}
