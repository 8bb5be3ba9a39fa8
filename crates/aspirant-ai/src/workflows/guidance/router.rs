use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::domain::{CandidateSubmission, PlanId, RecommendationId, StudyPlanRequest};
use super::repository::{RecommendationRepository, RepositoryError, StudyPlanRepository};
use super::service::{GuidanceService, GuidanceServiceError};
use crate::workflows::planning::PlanningError;

/// Router builder exposing HTTP endpoints for assessment, recommendation and
/// study planning.
pub fn guidance_router<R, P>(service: Arc<GuidanceService<R, P>>) -> Router
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/guidance/questions",
            get(questionnaire_handler::<R, P>),
        )
        .route(
            "/api/v1/guidance/recommendations",
            post(recommend_handler::<R, P>),
        )
        .route(
            "/api/v1/guidance/recommendations/:recommendation_id",
            get(recommendation_handler::<R, P>),
        )
        .route("/api/v1/guidance/study-plans", post(plan_handler::<R, P>))
        .route(
            "/api/v1/guidance/study-plans/:plan_id",
            get(study_plan_handler::<R, P>),
        )
        .route("/api/v1/guidance/exams", get(exam_catalog_handler::<R, P>))
        .route(
            "/api/v1/guidance/exams/:exam_code",
            get(exam_details_handler::<R, P>),
        )
        .with_state(service)
}

pub(crate) async fn questionnaire_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let questions = service.questionnaire();
    let payload = json!({
        "total": questions.len(),
        "questions": questions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn recommend_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
    axum::Json(submission): axum::Json<CandidateSubmission>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let today = Utc::now().date_naive();
    match service.recommend(submission, today) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(GuidanceServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "recommendation already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recommendation_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
    Path(recommendation_id): Path<String>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let id = RecommendationId(recommendation_id);
    match service.recommendation(&id) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "recommendation not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn plan_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
    axum::Json(request): axum::Json<StudyPlanRequest>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let today = Utc::now().date_naive();
    match service.build_study_plan(request, today) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(GuidanceServiceError::Planning(error @ PlanningError::UnknownExam(_))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(GuidanceServiceError::Planning(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "recommendation not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error @ GuidanceServiceError::NoRankedRoles) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "study plan already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn study_plan_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let id = PlanId(plan_id);
    match service.study_plan(&id) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(GuidanceServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "study plan not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn exam_catalog_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    let exams = service.planner().exams().list();
    let payload = json!({
        "exams": exams,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn exam_details_handler<R, P>(
    State(service): State<Arc<GuidanceService<R, P>>>,
    Path(exam_code): Path<String>,
) -> Response
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    match service.planner().exams().find(&exam_code) {
        Some(exam) => (StatusCode::OK, axum::Json(exam.details_view())).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown exam code {exam_code}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
