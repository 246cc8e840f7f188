#![recursion_limit = "256"]

mod backend;
mod config;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::backend::memory::MemoryBackend;
use crate::backend::rest::RestBackend;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = match &config.backend {
        Some(backend_config) => {
            let rest = match RestBackend::new(backend_config) {
                Ok(rest) => Arc::new(rest),
                Err(e) => {
                    tracing::error!(error = %e, "backend client init failed");
                    std::process::exit(1);
                }
            };
            tracing::info!(url = %backend_config.url, "using hosted backend");
            state::AppState::new(rest.clone(), rest, config.cookie_secure)
        }
        None => {
            tracing::warn!("BACKEND_URL not set; using in-memory backend, data is lost on restart");
            let memory = Arc::new(MemoryBackend::new());
            state::AppState::new(memory.clone(), memory, config.cookie_secure)
        }
    };

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "leptos app init failed");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "neocura listening");
    axum::serve(listener, app).await.expect("server failed");
}
