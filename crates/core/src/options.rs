//! Educator configuration: presets, option letters, glyphs, and the skip-list.

use crate::PunctualError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Elements whose content is never educated unless configured otherwise.
pub const DEFAULT_SKIP_TAGS: &str = "pre|code|kbd|script|style|math";

/// Named configurations with stable integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Leave the input untouched.
    DoNothing,
    /// Quotes, backticks, ellipses, and `--` as an em-dash.
    EmDash,
    /// Like [`Preset::EmDash`] with `---` as em-dash and `--` as en-dash.
    LongEmDashShortEn,
    /// Like [`Preset::EmDash`] with `--` as em-dash and `---` as en-dash.
    ShortEmDashLongEn,
    /// Old-school dashes plus conversion of international characters.
    #[default]
    Intl,
    /// Only turn glyph references back into ASCII punctuation.
    Stupefy,
}

impl Preset {
    /// Every preset, in slot order.
    pub const ALL: [Preset; 6] = [
        Preset::DoNothing,
        Preset::EmDash,
        Preset::LongEmDashShortEn,
        Preset::ShortEmDashLongEn,
        Preset::Intl,
        Preset::Stupefy,
    ];

    /// The integer code of the preset.
    pub fn code(self) -> i32 {
        match self {
            Preset::DoNothing => 0,
            Preset::EmDash => 1,
            Preset::LongEmDashShortEn => 2,
            Preset::ShortEmDashLongEn => 3,
            Preset::Intl => 4,
            Preset::Stupefy => -1,
        }
    }

    /// The kebab-case name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::DoNothing => "do-nothing",
            Preset::EmDash => "em-dash",
            Preset::LongEmDashShortEn => "long-em-dash-short-en",
            Preset::ShortEmDashLongEn => "short-em-dash-long-en",
            Preset::Intl => "intl",
            Preset::Stupefy => "stupefy",
        }
    }

    /// Position of the preset in [`Preset::ALL`].
    pub(crate) fn slot(self) -> usize {
        match self {
            Preset::DoNothing => 0,
            Preset::EmDash => 1,
            Preset::LongEmDashShortEn => 2,
            Preset::ShortEmDashLongEn => 3,
            Preset::Intl => 4,
            Preset::Stupefy => 5,
        }
    }
}

impl TryFrom<i32> for Preset {
    type Error = PunctualError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.code() == code)
            .ok_or_else(|| PunctualError::unknown_preset(code))
    }
}

impl FromStr for Preset {
    type Err = PunctualError;

    /// Accepts either the integer code or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return Preset::try_from(code);
        }
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PunctualError::unknown_preset(s))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How backtick-style quotes are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BacktickMode {
    /// Leave backticks alone.
    #[default]
    Off,
    /// ``` ``double'' ``` only.
    Double,
    /// ``` ``double'' ``` and `` `single' ``.
    DoubleAndSingle,
}

/// Which dash shorthand is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashMode {
    /// Leave hyphens alone.
    #[default]
    Off,
    /// `--` is an em-dash.
    EmDash,
    /// `---` is an em-dash and `--` an en-dash.
    OldSchool,
    /// `---` is an en-dash and `--` an em-dash.
    OldSchoolInverted,
}

/// Replacement strings emitted by the educator.
///
/// Defaults are numeric character references; see [`Glyphs::decode_entities`]
/// for literal characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Glyphs {
    /// Opening curly double quote.
    pub double_open: String,
    /// Closing curly double quote.
    pub double_close: String,
    /// Opening curly single quote.
    pub single_open: String,
    /// Closing curly single quote, also used for apostrophes.
    pub single_close: String,
    /// Replacement for ``` `` ```.
    pub backtick_double_open: String,
    /// Replacement for `''`.
    pub backtick_double_close: String,
    /// Replacement for a single backtick.
    pub backtick_single_open: String,
    /// Replacement for `'` in single-backtick mode.
    pub backtick_single_close: String,
    /// Em-dash.
    pub em_dash: String,
    /// En-dash.
    pub en_dash: String,
    /// Horizontal ellipsis.
    pub ellipsis: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            double_open: "&#8220;".to_string(),
            double_close: "&#8221;".to_string(),
            single_open: "&#8216;".to_string(),
            single_close: "&#8217;".to_string(),
            backtick_double_open: "&#8220;".to_string(),
            backtick_double_close: "&#8221;".to_string(),
            backtick_single_open: "&#8216;".to_string(),
            backtick_single_close: "&#8217;".to_string(),
            em_dash: "&#8212;".to_string(),
            en_dash: "&#8211;".to_string(),
            ellipsis: "&#8230;".to_string(),
        }
    }
}

impl Glyphs {
    /// Replace character references in every glyph with the characters they
    /// stand for, e.g. `&#8220;` becomes `“`.
    ///
    /// Meant to run once while setting up a configuration.
    pub fn decode_entities(&mut self) {
        for glyph in self.iter_mut() {
            let decoded = html_escape::decode_html_entities(glyph.as_str()).into_owned();
            *glyph = decoded;
        }
    }

    /// Consuming form of [`Glyphs::decode_entities`].
    pub fn decoded(mut self) -> Self {
        self.decode_entities();
        self
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut String> {
        [
            &mut self.double_open,
            &mut self.double_close,
            &mut self.single_open,
            &mut self.single_close,
            &mut self.backtick_double_open,
            &mut self.backtick_double_close,
            &mut self.backtick_single_open,
            &mut self.backtick_single_close,
            &mut self.em_dash,
            &mut self.en_dash,
            &mut self.ellipsis,
        ]
        .into_iter()
    }
}

/// Element names whose content is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkipList {
    names: Vec<String>,
}

impl SkipList {
    /// Parse a pipe-separated list such as `"pre|code|kbd"`.
    pub fn parse(list: &str) -> Result<Self, PunctualError> {
        let mut names = Vec::new();
        for name in list.split('|') {
            let name = name.trim();
            if name.is_empty() {
                return Err(PunctualError::invalid_skip_list(name, "empty name"));
            }
            if !name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b':')
            {
                return Err(PunctualError::invalid_skip_list(
                    name,
                    "unexpected character",
                ));
            }
            names.push(name.to_ascii_lowercase());
        }
        Ok(Self { names })
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// The lowercased element names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self {
            names: DEFAULT_SKIP_TAGS.split('|').map(str::to_string).collect(),
        }
    }
}

impl TryFrom<String> for SkipList {
    type Error = PunctualError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SkipList::parse(&value)
    }
}

impl From<SkipList> for String {
    fn from(list: SkipList) -> Self {
        list.names.join("|")
    }
}

/// Complete educator configuration.
///
/// `Options::default()` turns every pass off; use [`Options::from_preset`] or
/// [`Options::parse`] for the usual combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Return input unchanged, ignoring every other switch.
    pub do_nothing: bool,
    /// Curl straight quotes.
    pub quotes: bool,
    /// Backtick-style quotes.
    pub backticks: BacktickMode,
    /// Dash shorthand.
    pub dashes: DashMode,
    /// `...` and `. . .` to an ellipsis.
    pub ellipses: bool,
    /// Convert international characters to character references.
    pub intl: bool,
    /// Turn glyphs back into ASCII punctuation.
    pub stupefy: bool,
    /// Treat `&quot;` as a plain `"` before educating.
    pub convert_quot: bool,
    /// Replacement strings.
    pub glyphs: Glyphs,
    /// Elements left untouched.
    pub skip: SkipList,
}

impl Options {
    /// Configuration for a preset.
    pub fn from_preset(preset: Preset) -> Self {
        let mut options = Self::default();
        match preset {
            Preset::DoNothing => options.do_nothing = true,
            Preset::EmDash => options.enable_typography(DashMode::EmDash),
            Preset::LongEmDashShortEn => options.enable_typography(DashMode::OldSchool),
            Preset::ShortEmDashLongEn => options.enable_typography(DashMode::OldSchoolInverted),
            Preset::Intl => {
                options.enable_typography(DashMode::OldSchool);
                options.intl = true;
            }
            Preset::Stupefy => options.stupefy = true,
        }
        options
    }

    /// Configuration from option letters; unknown letters are ignored.
    ///
    /// | letter | effect                                  |
    /// |--------|-----------------------------------------|
    /// | `q`    | quotes                                  |
    /// | `b`    | backtick quotes, double only            |
    /// | `B`    | backtick quotes, double and single      |
    /// | `d`    | `--` em-dashes                          |
    /// | `D`    | old-school dashes                       |
    /// | `i`    | inverted old-school dashes              |
    /// | `e`    | ellipses                                |
    /// | `w`    | convert `&quot;` to `"` first           |
    pub fn from_letters(letters: &str) -> Self {
        let mut options = Self::default();
        for c in letters.chars() {
            match c {
                'q' => options.quotes = true,
                'b' => options.backticks = BacktickMode::Double,
                'B' => options.backticks = BacktickMode::DoubleAndSingle,
                'd' => options.dashes = DashMode::EmDash,
                'D' => options.dashes = DashMode::OldSchool,
                'i' => options.dashes = DashMode::OldSchoolInverted,
                'e' => options.ellipses = true,
                'w' => options.convert_quot = true,
                other => log::trace!("ignoring unknown option letter {:?}", other),
            }
        }
        options
    }

    /// Configuration from a single attribute string: a preset code
    /// (`"0"`..`"4"`, `"-1"`) or a run of option letters.
    pub fn parse(attr: &str) -> Self {
        match attr.trim().parse::<i32>().map(Preset::try_from) {
            Ok(Ok(preset)) => Self::from_preset(preset),
            _ => Self::from_letters(attr),
        }
    }

    /// Replace the glyphs.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Replace the skip-list.
    pub fn with_skip_list(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    fn enable_typography(&mut self, dashes: DashMode) {
        self.quotes = true;
        self.backticks = BacktickMode::Double;
        self.dashes = dashes;
        self.ellipses = true;
    }
}

impl From<Preset> for Options {
    fn from(preset: Preset) -> Self {
        Self::from_preset(preset)
    }
}
