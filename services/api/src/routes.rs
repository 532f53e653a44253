use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use startup_valuation::error::AppError;
use startup_valuation::workflows::valuation::{
    BackendPayload, ValuationAssessment, ValuationEngine, WizardAnswers,
};
use startup_valuation::workflows::wizard_import::WizardImporter;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchEstimateRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchEstimateResponse {
    pub(crate) count: usize,
    pub(crate) assessments: Vec<ValuationAssessment>,
}

pub(crate) fn valuation_routes(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/valuation/estimate", post(estimate_endpoint))
        .route("/api/v1/valuation/batch", post(batch_estimate_endpoint))
        .route("/api/v1/valuation/payload", post(backend_payload_endpoint))
        .layer(Extension(engine))
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

pub(crate) async fn estimate_endpoint(
    Extension(engine): Extension<Arc<ValuationEngine>>,
    Json(answers): Json<WizardAnswers>,
) -> Result<Json<ValuationAssessment>, AppError> {
    let assessment = engine.assess(&answers)?;
    info!(
        score = assessment.score,
        estimate = assessment.estimate,
        "provisional valuation served"
    );
    Ok(Json(assessment))
}

pub(crate) async fn batch_estimate_endpoint(
    Extension(engine): Extension<Arc<ValuationEngine>>,
    Json(payload): Json<BatchEstimateRequest>,
) -> Result<Json<BatchEstimateResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let batch = WizardImporter::from_reader(reader)?;

    let assessments = batch
        .iter()
        .map(|answers| engine.assess(answers))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = assessments.len(), "batch valuation served");
    Ok(Json(BatchEstimateResponse {
        count: assessments.len(),
        assessments,
    }))
}

pub(crate) async fn backend_payload_endpoint(
    Json(answers): Json<WizardAnswers>,
) -> Result<Json<BackendPayload>, AppError> {
    answers.validate()?;
    Ok(Json(BackendPayload::from_answers(&answers)))
}
