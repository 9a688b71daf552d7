//! Personal project portfolio: a themeable grid of project tiles.
//!
//! ## Layout
//!
//! - [`features::theme`] owns the light/dark/solar selection. The
//!   [`ThemeController`](features::theme::ThemeController) resolves the initial
//!   theme from storage or the ambient color-scheme preference, applies toggles
//!   according to its [`ThemeProfile`](features::theme::ThemeProfile), and
//!   persists the result when the profile asks for it.
//! - [`features::projects`] holds the static catalog and turns it into the
//!   ordered, title-keyed cards the grid renders.
//! - [`config`], [`errors`], [`motion`], [`styles`] and [`build_info`] are the
//!   shared plumbing around them.
//!
//! The core compiles and is tested on every target. The Leptos view tree
//! (`app` and `components`) only exists on `wasm32`, where `mount` attaches it
//! to `<body>`.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod features;
pub mod motion;
pub mod styles;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AppConfig;
pub use errors::AppError;

/// Mounts the page into `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    leptos::prelude::mount_to_body(app::App);
}
