use crate::domain::constants::CONFIG_ENV;
use crate::domain::models::RiskKey;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_risk() -> RiskKey {
    RiskKey::NoInvolvement
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneralConfig {
    /// Emit JSON even without `--json`.
    #[serde(default)]
    pub json: bool,
    /// Active level before any input yields a suggestion.
    #[serde(default = "default_risk")]
    pub default_risk: RiskKey,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            default_risk: default_risk(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct LoadedConfig {
    pub path: Option<String>,
    pub loaded: bool,
    pub config: Config,
}

/// `--config`, then `$KDPLAN_CONFIG`, then `~/.config/kdplan/config.toml`.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/kdplan/config.toml"))
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<LoadedConfig> {
    let path = config_path(explicit);
    let Some(p) = path.clone().filter(|p| p.exists()) else {
        if explicit.is_some() {
            anyhow::bail!(
                "config file not found: {}",
                path.map(|p| p.display().to_string()).unwrap_or_default()
            );
        }
        tracing::debug!(path = ?path, "no config file, using defaults");
        return Ok(LoadedConfig {
            path: path.map(|p| p.display().to_string()),
            loaded: false,
            config: Config::default(),
        });
    };
    let raw = std::fs::read_to_string(&p)
        .with_context(|| format!("reading config {}", p.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing config {}", p.display()))?;
    tracing::debug!(path = %p.display(), "loaded config");
    Ok(LoadedConfig {
        path: Some(p.display().to_string()),
        loaded: true,
        config,
    })
}
