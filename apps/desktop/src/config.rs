use std::{fs, path::Path, path::PathBuf, time::Duration};

use client_core::StorefrontOptions;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub owner_secret: String,
    pub login_error_ms: u64,
    pub share_url: String,
    pub app_title: String,
    pub locality: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = StorefrontOptions::default();
        Self {
            owner_secret: defaults.owner_secret,
            login_error_ms: defaults.login_error_display.as_millis() as u64,
            share_url: defaults.share_url,
            app_title: defaults.app_title,
            locality: defaults.locality,
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn storefront_options(&self) -> StorefrontOptions {
        StorefrontOptions {
            owner_secret: self.owner_secret.clone(),
            login_error_display: Duration::from_millis(self.login_error_ms),
            share_url: self.share_url.clone(),
            app_title: self.app_title.clone(),
            locality: self.locality.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    owner_secret: Option<String>,
    login_error_ms: Option<u64>,
    share_url: Option<String>,
    app_title: Option<String>,
    locality: Option<String>,
    catalog_path: Option<PathBuf>,
}

pub fn load_settings(config_path: &Path) -> Settings {
    load_settings_with(config_path, |name| std::env::var(name).ok())
}

/// File values override defaults; environment overrides both.
pub fn load_settings_with(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => tracing::warn!(
                path = %config_path.display(),
                "ignoring malformed settings file: {err}"
            ),
        }
    }

    if let Some(v) = env("OWNER_SECRET") {
        settings.owner_secret = v;
    }
    if let Some(v) = env("APP__OWNER_SECRET") {
        settings.owner_secret = v;
    }

    if let Some(v) = env("APP__LOGIN_ERROR_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.login_error_ms = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric APP__LOGIN_ERROR_MS"),
        }
    }

    if let Some(v) = env("APP__SHARE_URL") {
        settings.share_url = v;
    }
    if let Some(v) = env("APP__APP_TITLE") {
        settings.app_title = v;
    }
    if let Some(v) = env("APP__LOCALITY") {
        settings.locality = v;
    }

    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = (!v.trim().is_empty()).then(|| PathBuf::from(v));
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.owner_secret {
        settings.owner_secret = v;
    }
    if let Some(v) = file_cfg.login_error_ms {
        settings.login_error_ms = v;
    }
    if let Some(v) = file_cfg.share_url {
        settings.share_url = v;
    }
    if let Some(v) = file_cfg.app_title {
        settings.app_title = v;
    }
    if let Some(v) = file_cfg.locality {
        settings.locality = v;
    }
    if file_cfg.catalog_path.is_some() {
        settings.catalog_path = file_cfg.catalog_path;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
