use std::fmt;
use std::path::Path;

use beacon_search::SearchConfig;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BeaconConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "read error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load_config(path: &Path) -> Result<BeaconConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
    let cfg: BeaconConfig = toml::from_str(&s).map_err(ConfigError::Parse)?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
