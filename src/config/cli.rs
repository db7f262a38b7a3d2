use crate::config::toml_config::TomlConfig;
use crate::config::SetupConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "vuetify-chat-setup")]
#[command(about = "Generate Cursor chat rules, prompt templates and practice layouts for Vuetify UI/UX work")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the rules file and template folders are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Base URL of the RAG documentation service
    #[arg(long)]
    pub service_url: Option<String>,

    /// Health probe timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Do not probe the service; print the setup instructions instead
    #[arg(long)]
    pub skip_health_check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file if one was given, then flags. Validated.
    pub fn resolve(&self) -> Result<SetupConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.apply_to(SetupConfig::default())
            }
            None => SetupConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = &self.service_url {
            config.service_url = url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_seconds = timeout;
        }
        if self.skip_health_check {
            config.health_check = false;
        }

        config.validate()?;
        Ok(config)
    }
}
