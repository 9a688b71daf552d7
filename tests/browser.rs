//! Browser-only checks for the DOM adapters; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use portfolio::features::theme::{
    AmbientPreference, BrowserPreference, BrowserStorage, Theme, ThemeController, ThemeProfile,
    ThemeStorage, STORAGE_KEY,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips_the_theme() {
    let mut storage = BrowserStorage;
    assert!(storage.set(STORAGE_KEY, "dark").is_ok());
    assert_eq!(storage.get(STORAGE_KEY), Ok(Some("dark".to_string())));
}

#[wasm_bindgen_test]
fn browser_controller_restores_and_persists() {
    let mut storage = BrowserStorage;
    assert!(storage.set(STORAGE_KEY, "light").is_ok());

    let mut controller = ThemeController::browser(ThemeProfile::Standard);
    assert_eq!(controller.initialize(), Theme::Light);
    assert_eq!(controller.toggle(false), Theme::Dark);
    assert_eq!(storage.get(STORAGE_KEY), Ok(Some("dark".to_string())));
}

#[wasm_bindgen_test]
fn color_scheme_query_is_answered() {
    assert!(BrowserPreference.prefers_dark().is_some());
}
