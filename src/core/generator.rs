use crate::core::instructions::render_instructions;
use crate::core::templates::{
    guide_path, EXAMPLES_DIR, EXAMPLE_LAYOUTS, GUIDE, PROMPTS_DIR, PROMPT_TEMPLATES, RULES,
    RULES_FILE,
};
use crate::core::{ConfigProvider, HealthCheck, HealthStatus, Storage};
use crate::domain::model::{SetupReport, Template, WriteStatus, WrittenFile};
use crate::utils::error::{Result, SetupError};

pub struct SetupGenerator<S: Storage, H: HealthCheck, C: ConfigProvider> {
    storage: S,
    health: H,
    config: C,
}

impl<S: Storage, H: HealthCheck, C: ConfigProvider> SetupGenerator<S, H, C> {
    pub fn new(storage: S, health: H, config: C) -> Self {
        Self {
            storage,
            health,
            config,
        }
    }

    pub async fn run(&self) -> Result<SetupReport> {
        println!("🎯 Setting up Cursor AI Chat for Vuetify UI/UX Work");
        println!("{}", "=".repeat(50));

        let service_reachable = self.check_service().await;

        let mut files = Vec::new();
        files.push(self.write_rules_file().await?);
        files.extend(self.write_templates().await?);
        files.push(self.write_guide_document().await?);
        files.extend(self.write_example_inputs().await?);

        let instructions = self.print_instructions(service_reachable);

        Ok(SetupReport {
            service_reachable,
            files,
            instructions,
        })
    }

    pub async fn check_service(&self) -> bool {
        if !self.config.health_check_enabled() {
            tracing::info!("Health check disabled, assuming the RAG API is not running");
            return HealthStatus::Skipped.is_reachable();
        }

        let status = self.health.probe().await;
        match &status {
            HealthStatus::Healthy => tracing::info!("✅ RAG API is running and accessible"),
            HealthStatus::Unhealthy { status } => {
                tracing::warn!("⚠️  RAG API responded but with error (status {})", status)
            }
            HealthStatus::Unreachable { .. } | HealthStatus::Skipped => {
                tracing::warn!("⚠️  RAG API not running (will show setup instructions)")
            }
        }
        status.is_reachable()
    }

    pub async fn write_rules_file(&self) -> Result<WrittenFile> {
        let written = self.write(RULES_FILE.to_string(), RULES).await?;
        tracing::info!("✅ {} file written", RULES_FILE);
        Ok(written)
    }

    pub async fn write_templates(&self) -> Result<Vec<WrittenFile>> {
        let written = self.write_all(PROMPTS_DIR, PROMPT_TEMPLATES).await?;
        tracing::info!("✅ {} prompt templates written", written.len());
        Ok(written)
    }

    pub async fn write_guide_document(&self) -> Result<WrittenFile> {
        let written = self.write(guide_path(), GUIDE).await?;
        tracing::info!("✅ RAG integration guide written");
        Ok(written)
    }

    pub async fn write_example_inputs(&self) -> Result<Vec<WrittenFile>> {
        let written = self.write_all(EXAMPLES_DIR, EXAMPLE_LAYOUTS).await?;
        tracing::info!("✅ {} test layouts written", written.len());
        Ok(written)
    }

    /// Prints the closing instructions and returns the printed text.
    pub fn print_instructions(&self, service_reachable: bool) -> String {
        let text = render_instructions(
            service_reachable,
            self.config.service_url(),
            &self.config.health_url(),
        );
        println!("{}", text);
        text
    }

    async fn write_all(&self, dir: &str, templates: &[Template]) -> Result<Vec<WrittenFile>> {
        let mut written = Vec::with_capacity(templates.len());
        for template in templates {
            let path = format!("{}/{}", dir, template.name);
            written.push(self.write(path, template.content).await?);
        }
        Ok(written)
    }

    // Always rewrites; the previous content only decides what gets reported.
    async fn write(&self, path: String, content: &str) -> Result<WrittenFile> {
        let status = match self.storage.read_file(&path).await {
            Ok(previous) if previous == content.as_bytes() => WriteStatus::Unchanged,
            Ok(_) => WriteStatus::Updated,
            Err(SetupError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                WriteStatus::Created
            }
            Err(_) => WriteStatus::Updated,
        };

        self.storage.write_file(&path, content.as_bytes()).await?;
        tracing::debug!("Wrote {} bytes to {}", content.len(), path);
        println!("  {:<10} {}", status.label(), path);

        Ok(WrittenFile { path, status })
    }
}
