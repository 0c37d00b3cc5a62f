use anyhow::{Context, Result};
use energy_usage_monitor::{CatalogEntry, DEFAULT_REPORT_FILE, DEFAULT_TARIFF};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "~/.energy-usage.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnergyConfig {
    pub tariff: f64,
    pub report_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<CatalogEntry>>,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            tariff: DEFAULT_TARIFF,
            report_file: DEFAULT_REPORT_FILE.to_string(),
            catalog: None,
        }
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn get_config_path(explicit: Option<&str>) -> PathBuf {
    expand_path(explicit.unwrap_or(DEFAULT_CONFIG_PATH))
}

pub fn load_config(config_path: &Path) -> Result<EnergyConfig> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: EnergyConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
        Ok(config)
    } else {
        Ok(EnergyConfig::default())
    }
}

pub fn save_config(config_path: &Path, config: &EnergyConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    Ok(())
}
