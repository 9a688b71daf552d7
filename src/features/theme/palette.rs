use super::Theme;

/// Background/foreground color tokens for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#fafafa",
    foreground: "#0b0b0b",
};

const DARK: Palette = Palette {
    background: "#0a0a0a",
    foreground: "#e5e5e5",
};

const SOLAR: Palette = Palette {
    background: "#fdf6e3",
    foreground: "#586e75",
};

pub(crate) fn resolve(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
        Theme::Solar => SOLAR,
    }
}

/// Looks a palette up by its encoded theme name, falling back to the light
/// pair for anything unrecognized.
pub fn palette_for_name(name: &str) -> Palette {
    Theme::parse(name).map_or(LIGHT, resolve)
}
