use std::sync::PoisonError;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::info;

use crate::{
    app_state::AppState,
    samples::{sample_text, SAMPLE_COMMENTS},
    surface::{self, Surface},
};

// --- Payloads y Respuestas de la API ---

#[derive(Deserialize)]
pub struct AnalyzePayload {
    #[serde(default)]
    text: String,
}

/// Estado de la página tras el análisis y las notificaciones de esta misma petición.
#[derive(Serialize)]
pub struct AnalyzeReply {
    surface: Surface,
    notifications: Vec<String>,
}

// --- Router ---

/// Aplicación completa: API + ficheros estáticos de la página.
pub fn create_app(app_state: AppState) -> Router {
    let frontend_dir = app_state.config.frontend_dir.clone();
    Router::new()
        .merge(create_router(app_state))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/status", get(status_handler))
        .route("/api/sample-comments", get(sample_comments_handler))
        .route("/api/shutdown", post(shutdown_handler))
        .with_state(app_state)
}

// --- Handlers ---

#[axum::debug_handler]
async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzePayload>,
) -> (StatusCode, Json<AnalyzeReply>) {
    let (status, notifications) = match state.coordinator.analyze_text(&payload.text).await {
        Ok(_) => (StatusCode::OK, Vec::new()),
        Err(err) => (err.status_code(), vec![err.notification()]),
    };

    let surface = surface::lock(state.coordinator.surface()).clone();
    (
        status,
        Json(AnalyzeReply {
            surface,
            notifications,
        }),
    )
}

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<Surface> {
    Json(surface::lock(state.coordinator.surface()).clone())
}

#[axum::debug_handler]
async fn sample_comments_handler() -> Json<serde_json::Value> {
    Json(json!({ "comments": SAMPLE_COMMENTS, "text": sample_text() }))
}

// --- Handler de Apagado ---

#[axum::debug_handler]
async fn shutdown_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("Petición de apagado recibida.");
    let sender = state
        .shutdown_sender
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(sender) = sender {
        let _ = sender.send(());
    }
    StatusCode::OK
}
