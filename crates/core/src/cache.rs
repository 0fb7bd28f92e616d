//! Caller-owned cache of educators, one per preset.

use crate::educator::Educator;
use crate::options::Preset;
use once_cell::sync::OnceCell;

/// Lazily builds and keeps one [`Educator`] per [`Preset`].
///
/// Each slot is filled at most once, on first use, and can be read from any
/// number of threads afterwards.
///
/// ```
/// use punctual_core::{Preset, PresetCache};
///
/// let cache = PresetCache::new();
/// assert_eq!(cache.transform("the '80s", Preset::Intl), "the &#8217;80s");
/// ```
#[derive(Debug, Default)]
pub struct PresetCache {
    slots: [OnceCell<Educator>; Preset::ALL.len()],
}

impl PresetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The educator for `preset`, building it on first use.
    pub fn get(&self, preset: Preset) -> &Educator {
        self.slots[preset.slot()].get_or_init(|| {
            log::debug!("building educator for preset {}", preset);
            Educator::from_preset(preset)
        })
    }

    /// Transform `text` with the educator for `preset`.
    pub fn transform(&self, text: &str, preset: Preset) -> String {
        self.get(preset).transform(text)
    }

    /// Whether the educator for `preset` has been built.
    pub fn is_cached(&self, preset: Preset) -> bool {
        self.slots[preset.slot()].get().is_some()
    }
}
