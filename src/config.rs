//! Configuration loading for soco.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Get the soco home directory (~/.soco).
pub fn get_home_dir() -> Result<PathBuf> {
    let home = directories::UserDirs::new()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

    Ok(home.home_dir().join(".soco"))
}

/// Get the settings file path.
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_home_dir()?.join("settings.json"))
}

/// Load settings from ~/.soco/settings.json, then apply environment overrides.
pub fn load_settings() -> Result<Settings> {
    let path = get_settings_path()?;
    let mut settings = load_settings_from(&path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

/// Read a settings file. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    validate_settings(&settings)?;

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Overlay environment variables on top of file settings.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = get("XAI_API_KEY").or_else(|| get("GROK_API_KEY")) {
        settings.xai.api_key = Some(key);
    }
    if let Some(model) = get("XAI_MODEL") {
        settings.xai.model = model;
    }
    if let Some(url) = get("XAI_BASE_URL") {
        settings.xai.base_url = url;
    }
    if let Some(key) = get("ARCADE_API_KEY") {
        settings.arcade.api_key = Some(key);
    }
    if let Some(user) = get("ARCADE_USER_ID") {
        settings.arcade.user_id = Some(user);
    }
    if let Some(delay) = get("SOCO_POST_DELAY_SECONDS") {
        match delay.trim().parse() {
            Ok(secs) => settings.posting.delay_seconds = secs,
            Err(_) => tracing::warn!("Ignoring invalid SOCO_POST_DELAY_SECONDS '{}'", delay),
        }
    }
}

fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.xai.timeout_seconds == 0 {
        return Err(Error::Config(
            "xai.timeout_seconds must be greater than zero".to_string(),
        ));
    }
    if settings.repl.history_limit == 0 {
        return Err(Error::Config(
            "repl.history_limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Load settings or return default if not found.
pub fn load_settings_or_default() -> Settings {
    load_settings().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings: {}, using defaults", e);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
        settings
    })
}

/// XAI/Grok configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct XaiSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_xai_model")]
    pub model: String,
    #[serde(default = "default_xai_base_url")]
    pub base_url: String,
    #[serde(default = "default_xai_timeout")]
    pub timeout_seconds: u64,
}

fn default_xai_model() -> String {
    "grok-3".to_string()
}

fn default_xai_base_url() -> String {
    "https://api.x.ai/v1".to_string()
}

fn default_xai_timeout() -> u64 {
    90
}

impl Default for XaiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_xai_model(),
            base_url: default_xai_base_url(),
            timeout_seconds: default_xai_timeout(),
        }
    }
}

/// Arcade.dev configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArcadeSettings {
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    #[serde(default = "default_arcade_base_url")]
    pub base_url: String,
}

fn default_arcade_base_url() -> String {
    "https://api.arcade.dev".to_string()
}

impl Default for ArcadeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            user_id: None,
            base_url: default_arcade_base_url(),
        }
    }
}

/// Social posting configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostingSettings {
    #[serde(default = "default_post_delay")]
    pub delay_seconds: u64,
    pub results_dir: Option<PathBuf>,
}

fn default_post_delay() -> u64 {
    5
}

impl Default for PostingSettings {
    fn default() -> Self {
        Self {
            delay_seconds: default_post_delay(),
            results_dir: None,
        }
    }
}

impl PostingSettings {
    /// Directory post results are written to.
    pub fn results_dir(&self) -> Result<PathBuf> {
        match &self.results_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_home_dir()?.join("post_results")),
        }
    }
}

/// Interactive loop configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReplSettings {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_show_estimates")]
    pub show_estimates: bool,
}

fn default_history_limit() -> usize {
    100
}

fn default_show_estimates() -> bool {
    true
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            show_estimates: default_show_estimates(),
        }
    }
}

/// soco settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub xai: XaiSettings,

    #[serde(default)]
    pub arcade: ArcadeSettings,

    #[serde(default)]
    pub posting: PostingSettings,

    #[serde(default)]
    pub repl: ReplSettings,
}
