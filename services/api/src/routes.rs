use crate::infra::{catalog_source, load_catalog, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use shot_coach::coaching::{coaching_router, CoachingEngine};
use shot_coach::error::AppError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogReloadResponse {
    pub(crate) source: String,
    pub(crate) flaws: usize,
    pub(crate) combinations: usize,
    pub(crate) levels: usize,
    pub(crate) reloaded_at: DateTime<Utc>,
}

pub(crate) fn with_service_routes(engine: Arc<CoachingEngine>) -> axum::Router {
    coaching_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/coaching/catalog/reload",
            axum::routing::post(catalog_reload_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Re-read the configured catalog and swap it in. A catalog that fails to
/// load or validate leaves the running one untouched.
pub(crate) async fn catalog_reload_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<CatalogReloadResponse>, AppError> {
    let path = state.catalog_path.as_deref();
    let catalog = load_catalog(path)?;

    let response = CatalogReloadResponse {
        source: catalog_source(path),
        flaws: catalog.flaws().len(),
        combinations: catalog.combinations().len(),
        levels: catalog.levels().len(),
        reloaded_at: Utc::now(),
    };
    state.engine.reload(catalog);
    info!(source = %response.source, "catalog reload requested over http");

    Ok(Json(response))
}
