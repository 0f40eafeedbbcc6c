use knowledge_service::config::KnowledgeConfig;
use knowledge_service::startup::Application;
use service_core::observability::init_tracing;
use std::io::{self, IsTerminal, Write};

/// One-time credential bootstrap: if the key is missing and stdin is a
/// terminal, ask for it once before configuration is loaded. Request
/// handling never touches this path.
fn ensure_api_key() {
    let already_set = std::env::var("GOOGLE_API_KEY")
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    if already_set || !io::stdin().is_terminal() {
        return;
    }

    eprintln!("GOOGLE_API_KEY is not set.");
    eprint!("Enter your Google AI Studio API key: ");
    let _ = io::stderr().flush();

    let mut key = String::new();
    if io::stdin().read_line(&mut key).is_ok() {
        let key = key.trim();
        if !key.is_empty() {
            std::env::set_var("GOOGLE_API_KEY", key);
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    ensure_api_key();

    init_tracing("knowledge-service", "info");

    let config = KnowledgeConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
