use crate::config::SetupConfig;
use crate::utils::error::{Result, SetupError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    pub url: Option<String>,
    pub health_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub health_check: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Layers the keys present in the file over `base`.
    pub fn apply_to(&self, base: SetupConfig) -> SetupConfig {
        SetupConfig {
            service_url: self.service.url.clone().unwrap_or(base.service_url),
            health_path: self.service.health_path.clone().unwrap_or(base.health_path),
            timeout_seconds: self.service.timeout_seconds.unwrap_or(base.timeout_seconds),
            health_check: self.service.health_check.unwrap_or(base.health_check),
            output_dir: self.output.directory.clone().unwrap_or(base.output_dir),
        }
    }
}
