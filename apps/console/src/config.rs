use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "console.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub per_page: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            per_page: 10,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    base_url: Option<String>,
    per_page: Option<u32>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment variables.
fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.base_url {
                    settings.base_url = v;
                }
                if let Some(v) = file_cfg.per_page {
                    settings.per_page = v;
                }
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring unreadable settings file"
                );
            }
        }
    }

    if let Some(v) = env("BUSINESS_API_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("APP__PER_PAGE") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.per_page = parsed;
        }
    }

    settings
}

/// Trims the URL, drops trailing slashes and checks it is an http(s) origin.
pub fn normalize_base_url(raw_base_url: &str) -> anyhow::Result<String> {
    let raw_base_url = raw_base_url.trim();
    if raw_base_url.is_empty() {
        return Ok(Settings::default().base_url);
    }

    let trimmed = raw_base_url.trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).with_context(|| format!("invalid backend url '{raw_base_url}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "backend url '{raw_base_url}' must use http or https, got '{}'",
            parsed.scheme()
        );
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
