use serde::Serialize;

/// One linked external project, compiled into the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Display name; unique within a catalog and used as the card key.
    pub title: &'static str,
    /// Absolute external URL, opened in a new browsing context.
    pub url: &'static str,
    pub tagline: &'static str,
    pub tags: &'static [&'static str],
    /// Image reference; empty means no preview.
    pub preview: &'static str,
}

impl ProjectDescriptor {
    pub fn preview(&self) -> Option<&'static str> {
        let preview = self.preview.trim();
        if preview.is_empty() {
            None
        } else {
            Some(preview)
        }
    }
}
