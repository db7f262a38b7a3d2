use crate::domain::model::HealthStatus;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn health_path(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn output_dir(&self) -> &str;
    fn health_check_enabled(&self) -> bool;

    fn health_url(&self) -> String {
        format!(
            "{}{}",
            self.service_url().trim_end_matches('/'),
            self.health_path()
        )
    }
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Probes the companion service once. Never fails; errors become a status.
    async fn probe(&self) -> HealthStatus;
}
