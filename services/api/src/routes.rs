use crate::infra::AppState;
use arza::assessment::{
    assessment_router, AssessmentService, EvaluationRepository, ExerciseCatalog,
    TemplateCatalog, UNLOCK_RULES,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<R, C>(service: Arc<AssessmentService<R, C>>) -> axum::Router
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/questionnaire/rules",
            axum::routing::get(unlock_rules_endpoint),
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

/// Visibility table for wizard clients, one row per questionnaire field.
pub(crate) async fn unlock_rules_endpoint() -> Json<serde_json::Value> {
    let rules: Vec<serde_json::Value> = UNLOCK_RULES
        .iter()
        .map(|rule| {
            json!({
                "field": rule.field,
                "category": rule.field.category().key(),
                "parent": rule.parent,
                "condition": rule.condition,
                "gates_progress": rule.gates_progress,
            })
        })
        .collect();

    Json(json!({ "rules": rules }))
}
