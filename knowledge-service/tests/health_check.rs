//! Integration tests for knowledge-service startup and probes.
//!
//! These tests spawn the real application on a random port with a mock
//! provider injected. Run with: cargo test -p knowledge-service --test health_check

use knowledge_service::config::KnowledgeConfig;
use knowledge_service::services::providers::mock::MockTextProvider;
use knowledge_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    // Set test environment variables
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");
    std::env::set_var("KNOWLEDGE_TEXT_MODEL", "gemini-2.0-flash");

    let config = KnowledgeConfig::load().expect("Failed to load config");
    let provider = Arc::new(MockTextProvider::replying(
        r#"{"title":"🐙 Fact","content":"Octopuses have three hearts.","summary":"Three hearts."}"#,
    ));
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "knowledge-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn register_round_trips_over_http() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/register", port))
        .json(&serde_json::json!({ "topic": "octopuses" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["title"], "🐙 Fact");
    assert_eq!(body["summary"], "Three hearts.");
}
