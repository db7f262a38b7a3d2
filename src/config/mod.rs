#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_range, validate_url, validate_url_path, Validate,
};
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 3;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Fully resolved settings for one run: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    pub service_url: String,
    pub health_path: String,
    pub timeout_seconds: u64,
    pub health_check: bool,
    pub output_dir: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            health_check: true,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl Validate for SetupConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.url", &self.service_url)?;
        validate_url_path("service.health_path", &self.health_path)?;
        validate_range("service.timeout_seconds", self.timeout_seconds, 1, 60)?;
        validate_path("output.directory", &self.output_dir)?;
        Ok(())
    }
}

impl ConfigProvider for SetupConfig {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn health_path(&self) -> &str {
        &self.health_path
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn health_check_enabled(&self) -> bool {
        self.health_check
    }
}
