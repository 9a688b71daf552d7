//! Leptos context around a browser-backed [`ThemeController`]. The provider
//! initializes the controller once on mount and mirrors every toggle into a
//! signal, so theme-dependent views re-render after each change.

use super::{prefers_reduced_motion, Theme, ThemeController, ThemeProfile};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Theme context shared through Leptos.
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub profile: ThemeProfile,
    pub reduced_motion: bool,
    controller: StoredValue<ThemeController>,
}

impl ThemeContext {
    fn new(profile: ThemeProfile) -> Self {
        let mut controller = ThemeController::browser(profile);
        let (theme, set_theme) = signal(controller.initialize());
        controller.subscribe(move |next| set_theme.set(next));

        Self {
            theme: theme.into(),
            profile,
            reduced_motion: prefers_reduced_motion(),
            controller: StoredValue::new(controller),
        }
    }

    /// Runs one toggle; `modifier` selects the solar pair in the extended profile.
    pub fn toggle(&self, modifier: bool) {
        self.controller.update_value(|controller| {
            controller.toggle(modifier);
        });
    }
}

/// Provides the theme context for the whole page.
#[component]
pub fn ThemeProvider(profile: ThemeProfile, children: Children) -> impl IntoView {
    provide_context(ThemeContext::new(profile));

    view! { {children()} }
}

/// Returns the current theme context or a fresh standard-profile one.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext::new(ThemeProfile::Standard))
}
