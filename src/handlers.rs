use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{languages, TranslateRequest, TranslateResponse};
use crate::view::{self, ViewState};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateViewRequest {
    pub view: ViewState,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SwapRequest {
    pub view: ViewState,
}

pub fn error_response(err: TranslateError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        TranslateError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
        TranslateError::UnsupportedLanguage(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TranslateError::ModelInvocation(_) => StatusCode::BAD_GATEWAY,
        TranslateError::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    error!("Request failed ({}): {}", status, err);
    (status, Json(json!({"error": err.to_string()})))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let service_healthy = state.model_service.health_check().await.unwrap_or(false);
    let loaded = state.model.peek();
    Json(json!({
        "status": "ok",
        "model_loaded": state.model.is_loaded(),
        "model_name": loaded
            .map(|m| m.model.model_name().to_string())
            .unwrap_or_else(|| state.config.model_config.model_name.clone()),
        "loaded_at": loaded.map(|m| m.loaded_at),
        "model_service": service_healthy
    }))
}

pub async fn list_languages() -> Json<Value> {
    Json(json!(languages::entries()))
}

/// Everything the page needs for its first render
pub async fn ui_bootstrap(State(state): State<AppState>) -> Json<Value> {
    let ui = &state.config.ui_config;
    Json(json!({
        "title": ui.page_title,
        "subtitle": ui.subtitle,
        "caption": ui.caption,
        "languages": languages::list_languages(),
        "view": ViewState::initial(ui)
    }))
}

pub async fn translate_view(
    State(state): State<AppState>,
    Json(payload): Json<TranslateViewRequest>,
) -> ApiResult<ViewState> {
    let next = view::on_translate(payload.view, &payload.text, &state.translator)
        .await
        .map_err(error_response)?;
    Ok(Json(next))
}

pub async fn swap_view(Json(payload): Json<SwapRequest>) -> Json<ViewState> {
    Json(view::on_swap(payload.view))
}

/// Translation by ISO codes, bypassing the page state
pub async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> ApiResult<TranslateResponse> {
    let response = state
        .translator
        .handle(request)
        .await
        .map_err(error_response)?;
    Ok(Json(response))
}
