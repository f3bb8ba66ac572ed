use std::path::Path;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config from `path`. A missing file yields the default
/// config; an unreadable, unparsable or invalid one is an error.
pub fn load_yaml<TConfig>(path: &str) -> Result<TConfig, String>
where
    TConfig: for<'de> Deserialize<'de> + Validate + Default,
{
    if !Path::new(path).exists() {
        return Ok(TConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path, e))?;
    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path, e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml<TConfig>(path: &str, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content).map_err(|e| format!("Failed to write config {}: {}", path, e))
}
