use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::profile::UserProfile;
use super::record::{EvaluationId, EvaluationRepository, RepositoryError, UserId};
use super::responses::AssessmentResponses;
use super::routine::{
    ExerciseCatalog, RoutineError, RoutineId, TemplateCatalog, TrainingAvailability,
};
use super::service::{AssessmentService, AssessmentServiceError};
use super::unlock::visible_fields;

/// Router builder exposing HTTP endpoints for scoring, results, and routines.
pub fn assessment_router<R, C>(service: Arc<AssessmentService<R, C>>) -> Router
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    Router::new()
        .route("/api/v1/assessments/preview", post(preview_handler::<R, C>))
        .route(
            "/api/v1/users/:user_id/assessments",
            post(submit_handler::<R, C>),
        )
        .route(
            "/api/v1/users/:user_id/assessments/latest",
            get(latest_handler::<R, C>),
        )
        .route(
            "/api/v1/assessments/:evaluation_id",
            get(results_handler::<R, C>),
        )
        .route(
            "/api/v1/assessments/:evaluation_id/routine",
            post(routine_handler::<R, C>),
        )
        .route(
            "/api/v1/routines/:routine_id",
            get(routine_lookup_handler::<R, C>),
        )
        .route("/api/v1/profiles/validate", post(profile_handler))
        .with_state(service)
}

/// Body of a routine request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutineBody {
    pub days_per_week: u8,
    pub session_minutes: u16,
}

pub(crate) async fn preview_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Json(responses): Json<AssessmentResponses>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    let outcome = service.preview(&responses);
    let visible = visible_fields(&responses.answers());
    let payload = json!({
        "outcome": outcome,
        "visible_fields": visible,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Path(user_id): Path<String>,
    Json(responses): Json<AssessmentResponses>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    match service.submit(UserId(user_id), &responses) {
        Ok(results) => (StatusCode::CREATED, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    match service.latest_for_user(&UserId(user_id)) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    match service.results(&EvaluationId(evaluation_id)) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn routine_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Path(evaluation_id): Path<String>,
    Json(body): Json<RoutineBody>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    let availability = match TrainingAvailability::new(body.days_per_week, body.session_minutes)
    {
        Ok(availability) => availability,
        Err(error) => return error_response(error.into()),
    };

    match service.generate_routine(&EvaluationId(evaluation_id), availability) {
        Ok(routine) => (StatusCode::OK, Json(routine)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn routine_lookup_handler<R, C>(
    State(service): State<Arc<AssessmentService<R, C>>>,
    Path(routine_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: TemplateCatalog + ExerciseCatalog + 'static,
{
    match service.routine(&RoutineId(routine_id)) {
        Ok(routine) => (StatusCode::OK, Json(routine)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler(Json(profile): Json<UserProfile>) -> Response {
    let errors = profile.validate();
    if !errors.is_empty() {
        let payload = json!({ "errors": errors });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let payload = json!({
        "valid": true,
        "availability": profile.availability(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

fn error_response(error: AssessmentServiceError) -> Response {
    let (status, payload) = match error {
        AssessmentServiceError::Validation(errors) => {
            (StatusCode::UNPROCESSABLE_ENTITY, json!({ "errors": errors }))
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, json!({ "error": "record not found" }))
        }
        AssessmentServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            json!({ "error": "evaluation already exists" }),
        ),
        AssessmentServiceError::Routine(
            error @ (RoutineError::NoTemplate { .. }
            | RoutineError::UnsupportedAvailability { .. }),
        ) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": error.to_string() }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": other.to_string() }),
        ),
    };

    (status, Json(payload)).into_response()
}
