//! Build-time page configuration with an optional runtime override. The runtime
//! config is read from `window.PORTFOLIO_CONFIG` (if present) so a static
//! deployment can switch owner links or the theme profile without rebuilding.
//! Configuration values are public; do not store secrets here.

use crate::errors::AppError;
use crate::features::theme::ThemeProfile;
use serde::Deserialize;
use tracing::warn;

const DEFAULT_OWNER_HANDLE: &str = "248kt";
const DEFAULT_PROFILE_URL: &str = "https://github.com/248kt";

/// Page configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub owner_handle: String,
    pub profile_url: String,
    pub theme_profile: ThemeProfile,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("PORTFOLIO_OWNER_HANDLE"),
            option_env!("PORTFOLIO_PROFILE_URL"),
            option_env!("PORTFOLIO_THEME_PROFILE"),
        );

        match runtime_config() {
            Ok(Some(runtime)) => apply_runtime_overrides(&mut config, runtime),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "ignoring runtime config"),
        }

        config
    }

    fn from_build_env(
        owner_handle: Option<&str>,
        profile_url: Option<&str>,
        theme_profile: Option<&str>,
    ) -> Self {
        let theme_profile = match theme_profile.and_then(normalize_runtime_value) {
            Some(value) => value.parse().unwrap_or_else(|err: AppError| {
                warn!(error = %err, "falling back to the standard theme profile");
                ThemeProfile::Standard
            }),
            None => ThemeProfile::Standard,
        };

        Self {
            owner_handle: owner_handle
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_OWNER_HANDLE.to_string()),
            profile_url: profile_url
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_string()),
            theme_profile,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env(None, None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuntimeConfig {
    owner_handle: Option<String>,
    profile_url: Option<String>,
    theme_profile: Option<String>,
}

impl RuntimeConfig {
    fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|err| AppError::Parse(format!("Invalid PORTFOLIO_CONFIG: {err}")))
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.owner_handle.as_deref().and_then(normalize_runtime_value) {
        config.owner_handle = value;
    }
    if let Some(value) = runtime.profile_url.as_deref().and_then(normalize_runtime_value) {
        config.profile_url = value;
    }
    if let Some(value) = runtime.theme_profile.as_deref().and_then(normalize_runtime_value) {
        match value.parse() {
            Ok(profile) => config.theme_profile = profile,
            Err(err) => warn!(error = %err, "keeping configured theme profile"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Result<Option<RuntimeConfig>, AppError> {
    use js_sys::{Reflect, JSON};
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let config = Reflect::get(&window, &JsValue::from_str("PORTFOLIO_CONFIG"))
        .map_err(|err| AppError::Config(format!("Failed to read PORTFOLIO_CONFIG: {err:?}")))?;
    if config.is_null() || config.is_undefined() {
        return Ok(None);
    }
    let json = JSON::stringify(&config)
        .map_err(|err| AppError::Parse(format!("Failed to encode PORTFOLIO_CONFIG: {err:?}")))?
        .as_string()
        .unwrap_or_default();

    RuntimeConfig::from_json(&json).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Result<Option<RuntimeConfig>, AppError> {
    Ok(None)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
