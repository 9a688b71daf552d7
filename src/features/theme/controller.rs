//! Owner of the current theme. The controller is constructed with its storage
//! and preference sources injected, resolves the initial theme once, and is
//! the only place the theme changes. Views learn about changes through
//! observers registered with [`ThemeController::subscribe`].

use super::{
    AmbientPreference, BrowserPreference, BrowserStorage, Theme, ThemeProfile, ThemeStorage,
    STORAGE_KEY,
};
use tracing::{debug, warn};

type Observer = Box<dyn Fn(Theme) + Send + Sync>;

pub struct ThemeController<S = BrowserStorage, P = BrowserPreference> {
    profile: ThemeProfile,
    storage: S,
    preference: P,
    current: Theme,
    observers: Vec<Observer>,
}

impl ThemeController {
    /// Controller backed by `localStorage` and the `prefers-color-scheme` query.
    pub fn browser(profile: ThemeProfile) -> Self {
        Self::new(profile, BrowserStorage, BrowserPreference)
    }
}

impl<S: ThemeStorage, P: AmbientPreference> ThemeController<S, P> {
    /// Builds an uninitialized controller; the current theme is `light` until
    /// [`ThemeController::initialize`] runs.
    pub fn new(profile: ThemeProfile, storage: S, preference: P) -> Self {
        Self {
            profile,
            storage,
            preference,
            current: Theme::Light,
            observers: Vec::new(),
        }
    }

    /// Resolves the initial theme and makes it current.
    pub fn initialize(&mut self) -> Theme {
        let theme = match self.profile.fixed_initial() {
            Some(theme) => {
                debug!(profile = self.profile.as_str(), theme = %theme, "using fixed initial theme");
                theme
            }
            None => self.stored().unwrap_or_else(|| self.ambient()),
        };
        self.current = theme;
        theme
    }

    /// Applies one toggle, persists the result when the profile does, and
    /// notifies observers. Returns the new theme.
    pub fn toggle(&mut self, modifier: bool) -> Theme {
        let from = self.current;
        let to = self.profile.next(from, modifier);
        self.current = to;
        debug!(from = %from, to = %to, modifier, "theme toggled");

        if self.profile.persists() {
            if let Err(err) = self.storage.set(STORAGE_KEY, to.as_str()) {
                warn!(error = %err, "failed to persist theme");
            }
        }

        for observer in &self.observers {
            observer(to);
        }
        to
    }

    /// Registers a callback run after every toggle with the new theme.
    pub fn subscribe(&mut self, observer: impl Fn(Theme) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn profile(&self) -> ThemeProfile {
        self.profile
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn stored(&self) -> Option<Theme> {
        let value = match self.storage.get(STORAGE_KEY) {
            Ok(value) => value?,
            Err(err) => {
                warn!(error = %err, "failed to read stored theme");
                return None;
            }
        };

        match Theme::parse(&value).filter(|theme| self.profile.recognizes(*theme)) {
            Some(theme) => {
                debug!(theme = %theme, "restored stored theme");
                Some(theme)
            }
            None => {
                debug!(value = %value, "ignoring unrecognized stored theme");
                None
            }
        }
    }

    fn ambient(&self) -> Theme {
        let prefers_dark = self.preference.prefers_dark();
        let theme = if prefers_dark == Some(true) {
            Theme::Dark
        } else {
            Theme::Light
        };
        debug!(?prefers_dark, theme = %theme, "derived theme from ambient preference");
        theme
    }
}
