//! Style selection: preset descriptors plus a free-text override.

/// Quick-select style descriptors, in display order.
pub const PRESETS: &[&str] = &[
    "classic disney animation",
    "modern 3d pixar style",
    "japanese anime",
    "vintage comic book",
    "watercolor painting",
    "simpsons style",
];

/// Resolve the descriptor sent to the service.
///
/// Free text wins whenever it is non-empty after trimming; it is passed
/// on as typed. Otherwise the preset applies.
pub fn effective_descriptor<'a>(preset: &'a str, free_text: &'a str) -> &'a str {
    if free_text.trim().is_empty() {
        preset
    } else {
        free_text
    }
}

/// The user's current style choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSelection {
    preset: usize,
    custom: String,
}

impl StyleSelection {
    /// Pick a preset. Abandons any custom text; out-of-range is ignored.
    pub fn select_preset(&mut self, index: usize) -> bool {
        if index >= PRESETS.len() {
            return false;
        }
        self.preset = index;
        self.custom.clear();
        true
    }

    /// Replace the custom text. The preset stays remembered.
    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.custom = text.into();
    }

    pub fn preset_index(&self) -> usize {
        self.preset
    }

    pub fn preset(&self) -> &'static str {
        PRESETS[self.preset]
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    pub fn effective(&self) -> &str {
        effective_descriptor(self.preset(), &self.custom)
    }

    /// A preset shows as active only while no custom text is typed.
    pub fn is_preset_highlighted(&self, index: usize) -> bool {
        self.preset == index && self.custom.is_empty()
    }
}
