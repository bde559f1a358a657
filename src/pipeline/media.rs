//! Media reference detection and markup

/// Kind of media a field value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    /// Field markup embedding a stored media file
    pub fn markup(self, filename: &str) -> String {
        match self {
            MediaKind::Audio => format!("[sound:{}]", filename),
            MediaKind::Image => format!("<img src=\"{}\">", filename),
        }
    }
}

/// Lowercased text after the last `.`, if the value has one
pub fn candidate_extension(value: &str) -> Option<String> {
    value
        .rfind('.')
        .map(|pos| value[pos + 1..].to_lowercase())
}

/// True when the value already embeds media markup and must not be rewritten again
pub fn contains_markup(value: &str) -> bool {
    value.contains("[sound:") || value.contains("<img")
}
