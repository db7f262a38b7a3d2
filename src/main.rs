use clap::Parser;
use vuetify_chat_setup::core::ConfigProvider;
use vuetify_chat_setup::utils::error::SetupError;
use vuetify_chat_setup::utils::logger;
use vuetify_chat_setup::{CliConfig, HttpHealthCheck, LocalStorage, SetupGenerator};

fn report_failure(stage: &str, e: &SetupError) {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            report_failure("Configuration", &e);
            std::process::exit(1);
        }
    };

    let health = match HttpHealthCheck::new(config.health_url(), config.timeout()) {
        Ok(health) => health,
        Err(e) => {
            report_failure("HTTP client setup", &e);
            std::process::exit(e.exit_code());
        }
    };

    let storage = LocalStorage::new(config.output_dir().to_string());
    let generator = SetupGenerator::new(storage, health, config);

    match generator.run().await {
        Ok(report) => {
            tracing::info!(
                "Setup finished: {} files written, service reachable: {}",
                report.files.len(),
                report.service_reachable
            );
        }
        Err(e) => {
            report_failure("Setup", &e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
