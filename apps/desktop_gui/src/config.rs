use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use editor_core::DEFAULT_WINDOW_TITLE;
use gist_client::{DEFAULT_GIST_API_URL, DEFAULT_REQUEST_TIMEOUT};
use serde::Deserialize;
use url::Url;

pub const LOCAL_CONFIG_FILE: &str = "puzzlescript_editor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gist_api_url: String,
    pub request_timeout_secs: u64,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gist_api_url: DEFAULT_GIST_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub gist_api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    gist_api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    window_title: Option<String>,
}

/// Layers defaults, the config file, `APP__*` environment variables and CLI flags.
///
/// A `--config` file that is missing or malformed is an error. The implicit
/// config file may be absent, and a malformed one is skipped with a warning.
pub fn load_settings(cli: &CliOverrides) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match &cli.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw, path)?;
        }
        None => {
            if let Some(path) = default_config_path() {
                apply_default_file(&mut settings, &path);
            }
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    apply_cli(&mut settings, cli);
    Ok(settings)
}

/// Looks in the working directory first, then in the user config directory.
fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir().map(|dir| dir.join("puzzlescript-editor").join("config.toml"))
}

fn apply_default_file(settings: &mut Settings, path: &Path) {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return;
    };
    if let Err(err) = apply_file(settings, &raw, path) {
        tracing::warn!("{err:#}; using remaining settings layers");
    }
}

fn apply_file(settings: &mut Settings, raw: &str, path: &Path) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");

    if let Some(v) = file_cfg.gist_api_url {
        set_api_url(settings, v, "config file");
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        set_timeout(settings, v, "config file");
    }
    if let Some(v) = file_cfg.window_title {
        set_title(settings, v);
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__GIST_API_URL") {
        set_api_url(settings, v, "APP__GIST_API_URL");
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => set_timeout(settings, parsed, "APP__REQUEST_TIMEOUT_SECS"),
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric APP__REQUEST_TIMEOUT_SECS"),
        }
    }
    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        set_title(settings, v);
    }
}

fn apply_cli(settings: &mut Settings, cli: &CliOverrides) {
    if let Some(v) = &cli.gist_api_url {
        set_api_url(settings, v.clone(), "--gist-api-url");
    }
    if let Some(v) = cli.request_timeout_secs {
        set_timeout(settings, v, "--request-timeout-secs");
    }
}

fn set_api_url(settings: &mut Settings, value: String, origin: &str) {
    let value = value.trim().to_string();
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => settings.gist_api_url = value,
        _ => tracing::warn!(%origin, %value, "ignoring invalid gist api url"),
    }
}

fn set_timeout(settings: &mut Settings, value: u64, origin: &str) {
    if value == 0 {
        tracing::warn!(%origin, "ignoring zero request timeout");
        return;
    }
    settings.request_timeout_secs = value;
}

fn set_title(settings: &mut Settings, value: String) {
    if !value.trim().is_empty() {
        settings.window_title = value;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
