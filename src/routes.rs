use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Page data
        .route("/api/languages", get(handlers::list_languages))
        .route("/api/ui", get(handlers::ui_bootstrap))

        // Page actions
        .route("/api/translate", post(handlers::translate_view))
        .route("/api/swap", post(handlers::swap_view))
        .route("/api/translate/text", post(handlers::translate_text))

        // The page itself
        .fallback_service(ServeDir::new(system_config.static_path()))
}
