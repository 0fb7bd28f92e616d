//! Substitution passes applied to text tokens.
//!
//! Every pass is a pure function over a string and returns
//! [`Cow::Borrowed`] when it has nothing to replace. The educator runs them in
//! a fixed order because later passes rely on the output of earlier ones:
//! escapes come first, and backticks run before smart quotes.

use crate::options::{DashMode, Glyphs};
use std::borrow::Cow;

/// International character conversion.
pub mod intl;
/// Smart quote disambiguation.
pub mod quotes;

pub use intl::educate_intl;
pub use quotes::{educate_quotes, lone_quote};

/// Backslash escapes and the numeric references that replace them.
const ESCAPES: [(&str, &str); 6] = [
    ("\\\\", "&#92;"),
    ("\\\"", "&#34;"),
    ("\\'", "&#39;"),
    ("\\.", "&#46;"),
    ("\\-", "&#45;"),
    ("\\`", "&#96;"),
];

/// Replace backslash-escaped punctuation with numeric references so that no
/// later pass sees it.
///
/// ```
/// use punctual_core::passes::process_escapes;
///
/// assert_eq!(process_escapes(r#"\"dumb\""#), "&#34;dumb&#34;");
/// ```
pub fn process_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    replace_in_order(text, ESCAPES)
}

/// Turn `&quot;` entities into plain `"` so they can be educated.
pub fn convert_quot_entities(text: &str) -> Cow<'_, str> {
    replace_in_order(text, [("&quot;", "\"")])
}

/// Replace dash shorthand according to `mode`.
///
/// The three-hyphen form is replaced before the two-hyphen form, so `---`
/// never turns into a two-hyphen glyph followed by a stray `-`.
pub fn educate_dashes<'a>(text: &'a str, mode: DashMode, glyphs: &Glyphs) -> Cow<'a, str> {
    if !text.contains("--") {
        return Cow::Borrowed(text);
    }
    match mode {
        DashMode::Off => Cow::Borrowed(text),
        DashMode::EmDash => replace_in_order(text, [("--", glyphs.em_dash.as_str())]),
        DashMode::OldSchool => replace_in_order(
            text,
            [("---", glyphs.em_dash.as_str()), ("--", glyphs.en_dash.as_str())],
        ),
        DashMode::OldSchoolInverted => replace_in_order(
            text,
            [("---", glyphs.en_dash.as_str()), ("--", glyphs.em_dash.as_str())],
        ),
    }
}

/// Replace `...` and `. . .` with the ellipsis glyph.
pub fn educate_ellipses<'a>(text: &'a str, ellipsis: &str) -> Cow<'a, str> {
    replace_in_order(text, [("...", ellipsis), (". . .", ellipsis)])
}

/// Replace ``` ``double'' ``` backtick quotes.
pub fn educate_backticks<'a>(text: &'a str, glyphs: &Glyphs) -> Cow<'a, str> {
    replace_in_order(
        text,
        [
            ("``", glyphs.backtick_double_open.as_str()),
            ("''", glyphs.backtick_double_close.as_str()),
        ],
    )
}

/// Replace `` `single' `` backtick quotes. Every remaining `'` becomes a
/// closing quote, so this must run after [`educate_backticks`].
pub fn educate_single_backticks<'a>(text: &'a str, glyphs: &Glyphs) -> Cow<'a, str> {
    replace_in_order(
        text,
        [
            ("`", glyphs.backtick_single_open.as_str()),
            ("'", glyphs.backtick_single_close.as_str()),
        ],
    )
}

/// Turn dash, quote, and ellipsis glyphs back into ASCII punctuation.
///
/// ```
/// use punctual_core::options::Glyphs;
/// use punctual_core::passes::stupefy;
///
/// let out = stupefy("&#8220;Hello &#8212; world.&#8221;", &Glyphs::default());
/// assert_eq!(out, "\"Hello -- world.\"");
/// ```
pub fn stupefy<'a>(text: &'a str, glyphs: &Glyphs) -> Cow<'a, str> {
    replace_in_order(
        text,
        [
            (glyphs.en_dash.as_str(), "-"),
            (glyphs.em_dash.as_str(), "--"),
            (glyphs.single_open.as_str(), "'"),
            (glyphs.single_close.as_str(), "'"),
            (glyphs.backtick_single_open.as_str(), "'"),
            (glyphs.backtick_single_close.as_str(), "'"),
            (glyphs.double_open.as_str(), "\""),
            (glyphs.double_close.as_str(), "\""),
            (glyphs.backtick_double_open.as_str(), "\""),
            (glyphs.backtick_double_close.as_str(), "\""),
            (glyphs.ellipsis.as_str(), "..."),
        ],
    )
}

/// Apply each `(from, to)` replacement to the whole string in turn, so a
/// later pair sees the output of an earlier one. Empty patterns are skipped.
fn replace_in_order<'a, 'p, I>(text: &'a str, pairs: I) -> Cow<'a, str>
where
    I: IntoIterator<Item = (&'p str, &'p str)>,
{
    let mut current = Cow::Borrowed(text);
    for (from, to) in pairs {
        if !from.is_empty() && current.contains(from) {
            current = Cow::Owned(current.replace(from, to));
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs() -> Glyphs {
        Glyphs::default()
    }

    #[test]
    fn escapes_become_numeric_references() {
        assert_eq!(
            process_escapes(r#"\\ \" \' \. \- \`"#),
            "&#92; &#34; &#39; &#46; &#45; &#96;"
        );
        assert_eq!(process_escapes(r"Wait\.\.\."), "Wait&#46;&#46;&#46;");
    }

    #[test]
    fn escaped_backslash_is_consumed_first() {
        // `\\'` is an escaped backslash followed by a plain quote.
        assert_eq!(process_escapes(r"\\'"), "&#92;'");
    }

    #[test]
    fn text_without_work_is_borrowed() {
        assert!(matches!(process_escapes("plain"), Cow::Borrowed(_)));
        assert!(matches!(
            educate_dashes("a - b", DashMode::OldSchool, &glyphs()),
            Cow::Borrowed(_)
        ));
        assert!(matches!(educate_ellipses("a. b", "&#8230;"), Cow::Borrowed(_)));
    }

    #[test]
    fn quot_entities_become_quotes() {
        assert_eq!(convert_quot_entities("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn simple_dashes() {
        assert_eq!(
            educate_dashes("foo -- bar", DashMode::EmDash, &glyphs()),
            "foo &#8212; bar"
        );
        assert_eq!(
            educate_dashes("a---b", DashMode::EmDash, &glyphs()),
            "a&#8212;-b"
        );
    }

    #[test]
    fn old_school_dashes_prefer_the_long_form() {
        assert_eq!(
            educate_dashes("---", DashMode::OldSchool, &glyphs()),
            "&#8212;"
        );
        assert_eq!(
            educate_dashes("1--2 a---b", DashMode::OldSchool, &glyphs()),
            "1&#8211;2 a&#8212;b"
        );
    }

    #[test]
    fn inverted_dashes_swap_glyphs() {
        assert_eq!(
            educate_dashes("1---2 a--b", DashMode::OldSchoolInverted, &glyphs()),
            "1&#8211;2 a&#8212;b"
        );
    }

    #[test]
    fn ellipses_with_and_without_spaces() {
        assert_eq!(educate_ellipses("Huh...?", "&#8230;"), "Huh&#8230;?");
        assert_eq!(educate_ellipses("So . . . yes", "&#8230;"), "So &#8230; yes");
    }

    #[test]
    fn backticks_double_only() {
        assert_eq!(
            educate_backticks("``Isn't this fun?''", &glyphs()),
            "&#8220;Isn't this fun?&#8221;"
        );
    }

    #[test]
    fn backticks_single() {
        let g = glyphs();
        let out = educate_backticks("`Isn't this fun?'", &g);
        let out = educate_single_backticks(&out, &g);
        assert_eq!(out, "&#8216;Isn&#8217;t this fun?&#8217;");
    }

    #[test]
    fn backtick_glyphs_are_independent_of_smart_quotes() {
        let g = Glyphs {
            backtick_double_open: "<<".to_string(),
            backtick_double_close: ">>".to_string(),
            ..Glyphs::default()
        };
        assert_eq!(educate_backticks("``x''", &g), "<<x>>");
    }

    #[test]
    fn stupefy_reverses_default_glyphs() {
        assert_eq!(
            stupefy("&#8216;a&#8217; &#8211; b&#8230;", &glyphs()),
            "'a' - b..."
        );
    }

    #[test]
    fn stupefy_uses_configured_glyphs() {
        let decoded = Glyphs::default().decoded();
        assert_eq!(
            stupefy("\u{201c}Hi\u{201d} \u{2014} ok\u{2026}", &decoded),
            "\"Hi\" -- ok..."
        );
    }

    #[test]
    fn empty_glyphs_are_not_replaced() {
        let g = Glyphs {
            ellipsis: String::new(),
            ..Glyphs::default()
        };
        assert_eq!(stupefy("abc", &g), "abc");
    }
}
