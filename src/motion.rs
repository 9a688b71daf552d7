//! Cosmetic transition settings for the page background and card entrance.
//! Nothing functional depends on these; a reduced-motion request turns them
//! off without changing what is rendered or linked.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_css())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionConfig {
    pub duration_ms: u32,
    pub easing: Easing,
    pub disabled: bool,
}

impl MotionConfig {
    /// Card entrance: fade in while sliding up.
    pub const CARD: Self = Self {
        duration_ms: 280,
        easing: Easing::EaseOut,
        disabled: false,
    };

    /// Page background and text color cross-fade on theme change.
    pub const PAGE: Self = Self {
        duration_ms: 300,
        easing: Easing::EaseInOut,
        disabled: false,
    };

    /// Returns this config, or a disabled zero-length one when `reduced_motion`.
    pub fn for_motion_preference(self, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self {
                duration_ms: 0,
                disabled: true,
                ..self
            }
        } else {
            self
        }
    }

    /// CSS `transition` value covering `properties`.
    pub fn transition(&self, properties: &[&str]) -> String {
        if self.disabled || properties.is_empty() {
            return "none".to_string();
        }
        properties
            .iter()
            .map(|property| format!("{property} {}ms {}", self.duration_ms, self.easing))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, MotionConfig};

    #[test]
    fn reduced_motion_disables_and_zeroes_duration() {
        for config in [MotionConfig::CARD, MotionConfig::PAGE] {
            let reduced = config.for_motion_preference(true);
            assert!(reduced.disabled);
            assert_eq!(reduced.duration_ms, 0);
            assert_eq!(reduced.easing, config.easing);
        }
    }

    #[test]
    fn full_motion_keeps_the_config() {
        assert_eq!(MotionConfig::CARD.for_motion_preference(false), MotionConfig::CARD);
    }

    #[test]
    fn transition_lists_each_property() {
        assert_eq!(
            MotionConfig::CARD.transition(&["opacity", "transform"]),
            "opacity 280ms ease-out, transform 280ms ease-out"
        );
    }

    #[test]
    fn disabled_transition_is_none() {
        let config = MotionConfig {
            duration_ms: 500,
            easing: Easing::Linear,
            disabled: true,
        };
        assert_eq!(config.transition(&["opacity"]), "none");
        assert_eq!(MotionConfig::PAGE.transition(&[]), "none");
    }
}
