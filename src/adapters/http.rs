use crate::domain::model::HealthStatus;
use crate::domain::ports::HealthCheck;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Single GET against the companion service's health endpoint.
pub struct HttpHealthCheck {
    client: Client,
    url: String,
}

impl HttpHealthCheck {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl HealthCheck for HttpHealthCheck {
    async fn probe(&self) -> HealthStatus {
        tracing::debug!("Probing service health at: {}", self.url);

        match self.client.get(&self.url).send().await {
            Ok(response) if response.status() == StatusCode::OK => HealthStatus::Healthy,
            Ok(response) => {
                tracing::debug!("Health endpoint answered with status {}", response.status());
                HealthStatus::Unhealthy {
                    status: response.status().as_u16(),
                }
            }
            Err(e) => {
                tracing::debug!("Health probe failed: {}", e);
                HealthStatus::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
