use crate::state::AppStateV2;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use serde_json::json;

pub fn new() -> Router<AppStateV2> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// 首頁直接導到シフト頁
pub async fn index() -> Redirect {
    Redirect::to("/shifts")
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "empty page")
}
