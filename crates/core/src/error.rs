use thiserror::Error;

/// Errors raised while building a configuration.
///
/// Transforming text never fails; these only surface when a preset code or a
/// skip-list coming from outside the crate cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PunctualError {
    /// A preset code or name that does not correspond to any preset.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    /// A skip-list entry that is not a valid element name.
    #[error("Invalid skip list entry {name:?}: {reason}")]
    InvalidSkipList {
        /// Offending entry, as written.
        name: String,
        /// Why the entry was rejected.
        reason: &'static str,
    },
}

impl PunctualError {
    /// Create an unknown preset error from any displayable value.
    pub fn unknown_preset(value: impl std::fmt::Display) -> Self {
        Self::UnknownPreset(value.to_string())
    }

    /// Create a skip-list error for the given entry.
    pub fn invalid_skip_list(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidSkipList {
            name: name.into(),
            reason,
        }
    }
}

/// Coarse category of a [`PunctualError`], used by the bindings to tag errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Preset lookup failed.
    Preset,
    /// Skip-list parsing failed.
    SkipList,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ErrorKind::Preset => "preset",
            ErrorKind::SkipList => "skip-list",
        };
        write!(f, "{}", kind)
    }
}

impl PunctualError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PunctualError::UnknownPreset(_) => ErrorKind::Preset,
            PunctualError::InvalidSkipList { .. } => ErrorKind::SkipList,
        }
    }
}
