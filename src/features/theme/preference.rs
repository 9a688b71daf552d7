//! Ambient appearance preferences reported by the environment. Both are read
//! once, when the page mounts; there is no live subscription.

/// Source of the environment's dark-appearance preference.
pub trait AmbientPreference {
    /// `None` when the environment cannot report a preference.
    fn prefers_dark(&self) -> Option<bool>;
}

/// `prefers-color-scheme` media query.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreference;

impl AmbientPreference for BrowserPreference {
    fn prefers_dark(&self) -> Option<bool> {
        media_matches("(prefers-color-scheme: dark)")
    }
}

/// Preference with a fixed answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPreference(pub Option<bool>);

impl AmbientPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Whether the user asked for reduced motion; `false` when unknown.
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn media_matches(query: &str) -> Option<bool> {
    let list = web_sys::window()?.match_media(query).ok()??;
    Some(list.matches())
}

#[cfg(not(target_arch = "wasm32"))]
fn media_matches(_query: &str) -> Option<bool> {
    None
}
