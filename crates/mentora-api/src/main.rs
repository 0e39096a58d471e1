//! # mentora-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Mentora dashboards.
//! Binds to a configurable port (default 8080).

use mentora_api::state::{AppConfig, AppState};
use mentora_flow::notify::{DEFAULT_HISTORY_PATH, DEFAULT_WORKSPACE};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let slack_workspace =
        std::env::var("SLACK_WORKSPACE").unwrap_or_else(|_| DEFAULT_WORKSPACE.to_string());
    let history_path =
        std::env::var("HISTORY_PATH").unwrap_or_else(|_| DEFAULT_HISTORY_PATH.to_string());
    let config = AppConfig {
        port,
        slack_workspace,
        history_path,
    };

    // Attempt to create the tutoring backend client from environment.
    let client = match mentora_client::TutoringApiConfig::from_env() {
        Ok(client_config) => {
            tracing::info!("tutoring backend client configured");
            match mentora_client::TutoringClient::new(client_config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!("failed to create tutoring backend client: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "tutoring backend not configured: {e}. Proxied endpoints will return 503."
            );
            None
        }
    };

    let state = AppState::new(config, client);
    let app = mentora_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Mentora API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
