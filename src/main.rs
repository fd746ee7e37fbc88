mod config_manager;
mod error;
mod handlers;
mod model;
mod model_service;
mod routes;
mod state;
mod translate;
mod view;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crosslingual_translator=debug,tower_http=debug")),
        )
        .init();

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.jsonld".to_string()),
        Some("conf.json".to_string()),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let config = Config::resolve(&config_paths)?;

    let addr = config.system_config.socket_addr()?;
    let app_state = AppState::new(config);

    // Load the model up front; a failure here is retried on first use
    if app_state.config.model_config.preload {
        let model = app_state.model.clone();
        tokio::spawn(async move {
            if let Err(e) = model.get().await {
                warn!("Model preload failed: {}", e);
            }
        });
    }

    let app = Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
