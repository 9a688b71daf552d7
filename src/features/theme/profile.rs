//! Profiles describe which themes a deployment offers and how the controller
//! starts, toggles and persists. They are configuration, chosen per
//! deployment through `AppConfig`.

use super::Theme;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeProfile {
    /// Light and dark, restored from storage and saved on every toggle.
    #[default]
    Standard,
    /// Light, dark and solar, starting from a fixed theme and never persisted.
    Extended,
}

impl ThemeProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeProfile::Standard => "standard",
            ThemeProfile::Extended => "extended",
        }
    }

    pub fn members(self) -> &'static [Theme] {
        match self {
            ThemeProfile::Standard => &[Theme::Light, Theme::Dark],
            ThemeProfile::Extended => &Theme::ALL,
        }
    }

    pub fn recognizes(self, theme: Theme) -> bool {
        self.members().contains(&theme)
    }

    pub fn persists(self) -> bool {
        matches!(self, ThemeProfile::Standard)
    }

    /// Initial theme for profiles that do not consult storage or preference.
    pub fn fixed_initial(self) -> Option<Theme> {
        match self {
            ThemeProfile::Standard => None,
            ThemeProfile::Extended => Some(Theme::Light),
        }
    }

    /// Transition applied by a toggle from `current`. Branch order matters:
    /// `dark` is checked first, every other value goes to `dark`.
    pub fn next(self, current: Theme, modifier: bool) -> Theme {
        match self {
            ThemeProfile::Extended if modifier => {
                if current == Theme::Solar {
                    Theme::Light
                } else {
                    Theme::Solar
                }
            }
            ThemeProfile::Standard | ThemeProfile::Extended => {
                if current == Theme::Dark {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }
}

impl FromStr for ThemeProfile {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ThemeProfile::Standard),
            "extended" => Ok(ThemeProfile::Extended),
            other => Err(AppError::Config(format!("unknown theme profile: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeProfile;
    use crate::features::theme::Theme;

    #[test]
    fn standard_flips_between_light_and_dark() {
        let profile = ThemeProfile::Standard;
        assert_eq!(profile.next(Theme::Light, false), Theme::Dark);
        assert_eq!(profile.next(Theme::Dark, false), Theme::Light);
    }

    #[test]
    fn standard_ignores_the_modifier() {
        let profile = ThemeProfile::Standard;
        assert_eq!(profile.next(Theme::Light, true), Theme::Dark);
        assert_eq!(profile.next(Theme::Dark, true), Theme::Light);
    }

    #[test]
    fn extended_modifier_cycles_solar_and_light() {
        let profile = ThemeProfile::Extended;
        assert_eq!(profile.next(Theme::Solar, true), Theme::Light);
        assert_eq!(profile.next(Theme::Light, true), Theme::Solar);
        assert_eq!(profile.next(Theme::Dark, true), Theme::Solar);
    }

    #[test]
    fn extended_plain_toggle_sends_solar_to_dark() {
        let profile = ThemeProfile::Extended;
        assert_eq!(profile.next(Theme::Solar, false), Theme::Dark);
        assert_eq!(profile.next(Theme::Dark, false), Theme::Light);
        assert_eq!(profile.next(Theme::Light, false), Theme::Dark);
    }

    #[test]
    fn only_extended_recognizes_solar() {
        assert!(!ThemeProfile::Standard.recognizes(Theme::Solar));
        assert!(ThemeProfile::Extended.recognizes(Theme::Solar));
    }

    #[test]
    fn from_str_accepts_known_names_case_insensitively() {
        assert_eq!("Extended".parse::<ThemeProfile>().ok(), Some(ThemeProfile::Extended));
        assert_eq!(" standard ".parse::<ThemeProfile>().ok(), Some(ThemeProfile::Standard));
        assert!("triple".parse::<ThemeProfile>().is_err());
    }
}
