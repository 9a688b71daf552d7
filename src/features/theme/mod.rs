//! Theme selection for the page: the closed set of palettes, the profiles that
//! decide which of them are reachable, and the controller that owns the current
//! value. Everything here is plain Rust so it runs the same under `cargo test`
//! as in the browser; only the storage and media-query adapters touch the DOM.

pub(crate) mod controller;
pub(crate) mod palette;
pub(crate) mod preference;
pub(crate) mod profile;
pub(crate) mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) mod context;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use controller::ThemeController;
pub use palette::{palette_for_name, Palette};
pub use preference::{prefers_reduced_motion, AmbientPreference, BrowserPreference, FixedPreference};
pub use profile::ThemeProfile;
pub use storage::{BrowserStorage, MemoryStorage, ThemeStorage, STORAGE_KEY};

/// A named visual palette selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Solar,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Solar];

    /// Plain-text encoding used in storage and `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Solar => "solar",
        }
    }

    /// Parses the storage encoding. Surrounding whitespace and case are not
    /// tolerated; anything else is treated as an unknown value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == value)
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn palette(self) -> Palette {
        palette::resolve(self)
    }

    /// Class set on the page root so `dark:` / `solar:` utilities apply.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
            Theme::Solar => Some("solar"),
        }
    }

    /// Label for the toggle button, naming what a plain click switches to.
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark() {
            "Light"
        } else {
            "Dark"
        }
    }

    /// Glyph shown next to [`Theme::toggle_label`].
    pub fn toggle_glyph(self) -> &'static str {
        if self.is_dark() {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn parse_accepts_every_encoding() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_mangled_values() {
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(" dark"), None);
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn toggle_label_names_the_next_plain_state() {
        assert_eq!(Theme::Dark.toggle_label(), "Light");
        assert_eq!(Theme::Light.toggle_label(), "Dark");
        assert_eq!(Theme::Solar.toggle_label(), "Dark");
    }

    #[test]
    fn root_class_is_absent_for_light() {
        assert_eq!(Theme::Light.root_class(), None);
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
        assert_eq!(Theme::Solar.root_class(), Some("solar"));
    }

    #[test]
    fn serde_uses_the_storage_encoding() {
        assert_eq!(serde_json::to_string(&Theme::Solar).ok().as_deref(), Some("\"solar\""));
        let parsed: Result<Theme, _> = serde_json::from_str("\"dark\"");
        assert_eq!(parsed.ok(), Some(Theme::Dark));
    }
}
