use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{CoachingReport, FlawId, FlawSet, Measurements};
use super::engine::CoachingEngine;
use super::scoring::ImpactBreakdown;

/// Router exposing the coaching engine over HTTP.
pub fn coaching_router(engine: Arc<CoachingEngine>) -> Router {
    Router::new()
        .route("/api/v1/coaching/flaws", get(flaws_handler))
        .route("/api/v1/coaching/analyze", post(analyze_handler))
        .route("/api/v1/coaching/report", post(report_handler))
        .route("/api/v1/coaching/levels/:score", get(level_handler))
        .with_state(engine)
}

/// Catalog listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlawSummaryView {
    pub id: FlawId,
    pub name: String,
    pub category: String,
    pub priority: u8,
    pub metric: String,
    pub qualitative: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub flaws: FlawSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report: CoachingReport,
    pub impact: ImpactBreakdown,
    pub final_score: u32,
}

pub(crate) async fn flaws_handler(State(engine): State<Arc<CoachingEngine>>) -> Response {
    let catalog = engine.catalog();
    let flaws: Vec<FlawSummaryView> = catalog
        .flaws()
        .iter()
        .map(|flaw| FlawSummaryView {
            id: flaw.id.clone(),
            name: flaw.name.clone(),
            category: flaw.category.clone(),
            priority: flaw.priority,
            metric: flaw.detection_rule.metric().to_string(),
            qualitative: flaw.detection_rule.is_qualitative(),
        })
        .collect();

    (StatusCode::OK, Json(flaws)).into_response()
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<CoachingEngine>>,
    Json(measurements): Json<Measurements>,
) -> Response {
    let analysis = engine.analyze(&measurements);
    (StatusCode::OK, Json(analysis)).into_response()
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<CoachingEngine>>,
    Json(request): Json<ReportRequest>,
) -> Response {
    let impact = engine.impact_breakdown(&request.flaws);
    let report = engine.synthesize(&request.flaws);
    let body = ReportResponse {
        final_score: impact.final_score(),
        report,
        impact,
    };

    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn level_handler(
    State(engine): State<Arc<CoachingEngine>>,
    Path(score): Path<f64>,
) -> Response {
    let level = engine.classify(score);
    (StatusCode::OK, Json(level)).into_response()
}
