//! Converts international letters and a few symbols to character references.

use std::borrow::Cow;
use std::fmt::Write;

/// Named references for U+00A0..=U+00FF, indexed by `code point - 0xA0`.
const LATIN1_NAMES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute", "ucirc",
    "uuml", "yacute", "thorn", "yuml",
];

/// Named references outside Latin-1; everything else converted gets `&#N;`.
const EXTENDED_NAMES: [(char, &str); 6] = [
    ('\u{152}', "OElig"),
    ('\u{153}', "oelig"),
    ('\u{160}', "Scaron"),
    ('\u{161}', "scaron"),
    ('\u{178}', "Yuml"),
    ('\u{192}', "fnof"),
];

/// Whether `c` is rewritten by [`educate_intl`].
pub fn is_converted(c: char) -> bool {
    matches!(
        c,
        '$' | '%'
            | '^'
            | '~'
            | '\u{a0}'..='\u{24f}'
            | '\u{287}'..='\u{29d}'
            | '\u{2019}'
            | '\u{201c}'
            | '\u{201d}'
    )
}

/// Character reference for `c`, or `None` if it is left alone.
pub fn reference(c: char) -> Option<String> {
    if !is_converted(c) {
        return None;
    }
    let mut out = String::new();
    push_reference(&mut out, c);
    Some(out)
}

/// Replace every convertible character with its reference in a single
/// left-to-right scan.
///
/// ```
/// use punctual_core::passes::educate_intl;
///
/// assert_eq!(educate_intl("Caf\u{e9} \u{153}uvre"), "Caf&eacute; &oelig;uvre");
/// ```
pub fn educate_intl(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_converted) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if is_converted(c) {
            push_reference(&mut out, c);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn push_reference(out: &mut String, c: char) {
    let cp = c as u32;
    // Writing into a String cannot fail.
    let _ = if (0xa0..=0xff).contains(&cp) {
        write!(out, "&{};", LATIN1_NAMES[(cp - 0xa0) as usize])
    } else if let Some((_, name)) = EXTENDED_NAMES.iter().find(|(ch, _)| *ch == c) {
        write!(out, "&{};", name)
    } else {
        write!(out, "&#{};", cp)
    };
}
