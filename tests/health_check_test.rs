use httpmock::prelude::*;
use std::time::Duration;
use vuetify_chat_setup::core::HealthCheck;
use vuetify_chat_setup::{HealthStatus, HttpHealthCheck};

fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/health", port)
}

#[tokio::test]
async fn test_probe_is_healthy_on_200() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let health_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200).body("ok");
        })
        .await;

    let check = HttpHealthCheck::new(server.url("/health"), Duration::from_secs(3))?;
    let status = check.probe().await;

    assert_eq!(status, HealthStatus::Healthy);
    assert!(status.is_reachable());
    health_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_probe_reports_error_status() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let health_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        })
        .await;

    let check = HttpHealthCheck::new(server.url("/health"), Duration::from_secs(3))?;
    let status = check.probe().await;

    assert_eq!(status, HealthStatus::Unhealthy { status: 503 });
    assert!(!status.is_reachable());
    health_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_only_200_counts_as_success() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(204);
        })
        .await;

    let check = HttpHealthCheck::new(server.url("/health"), Duration::from_secs(3))?;
    assert_eq!(check.probe().await, HealthStatus::Unhealthy { status: 204 });
    Ok(())
}

#[tokio::test]
async fn test_probe_handles_connection_refused() -> anyhow::Result<()> {
    let check = HttpHealthCheck::new(unused_local_url(), Duration::from_secs(1))?;
    let status = check.probe().await;

    assert!(matches!(status, HealthStatus::Unreachable { .. }));
    assert!(!status.is_reachable());
    Ok(())
}

#[tokio::test]
async fn test_probe_times_out() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200).delay(Duration::from_secs(3));
        })
        .await;

    let check = HttpHealthCheck::new(server.url("/health"), Duration::from_millis(300))?;
    let status = check.probe().await;

    assert!(matches!(status, HealthStatus::Unreachable { .. }));
    Ok(())
}
