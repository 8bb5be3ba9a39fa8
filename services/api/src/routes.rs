use crate::infra::{deserialize_optional_date, AppState};
use aspirant_ai::error::AppError;
use aspirant_ai::workflows::guidance::{
    guidance_router, CareerRecommendation, GuidanceService, IntakeGuard, OlqQuestionBank,
    RecommendationEngine, RecommendationRepository, RoleCatalog, StudyPlanRepository,
};
use aspirant_ai::workflows::roster::RosterImporter;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchScreenRequest {
    pub(crate) roster_csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_recommendations: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScreenResponse {
    pub(crate) today: NaiveDate,
    pub(crate) total: usize,
    pub(crate) screened: usize,
    pub(crate) rejected: usize,
    pub(crate) candidates: Vec<BatchCandidateOutcome>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchCandidateOutcome {
    pub(crate) line: u64,
    pub(crate) candidate_name: String,
    pub(crate) top_role: Option<String>,
    pub(crate) match_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rejection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recommendation: Option<CareerRecommendation>,
}

pub(crate) fn with_guidance_routes<R, P>(service: Arc<GuidanceService<R, P>>) -> axum::Router
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    guidance_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/guidance/batch-screen",
            axum::routing::post(batch_screen_endpoint),
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

/// Screens a counsellor roster in one shot without persisting anything.
/// Row-level intake failures are reported per candidate; only a malformed
/// CSV fails the request.
pub(crate) async fn batch_screen_endpoint(
    Json(payload): Json<BatchScreenRequest>,
) -> Result<Json<BatchScreenResponse>, AppError> {
    let BatchScreenRequest {
        roster_csv,
        today,
        include_recommendations,
    } = payload;

    let roster = RosterImporter::from_reader(Cursor::new(roster_csv.into_bytes()))?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let guard = IntakeGuard::default();
    let bank = OlqQuestionBank::standard();
    let engine = RecommendationEngine::new(RoleCatalog::standard());

    let mut screened = 0;
    let mut rejected = 0;
    let mut candidates = Vec::with_capacity(roster.len());

    for candidate in roster {
        let name = candidate.submission.personal.full_name.clone();
        match guard.profile_from_submission(candidate.submission, today, &bank) {
            Ok(outcome) => {
                let recommendation = engine.evaluate(&outcome.profile);
                let top = recommendation.recommendations.first();
                let top_role = top.map(|role| role.role_name.clone());
                let match_score = top.map(|role| role.match_score);
                screened += 1;
                candidates.push(BatchCandidateOutcome {
                    line: candidate.line,
                    candidate_name: name,
                    top_role,
                    match_score,
                    rejection: None,
                    recommendation: include_recommendations.then_some(recommendation),
                });
            }
            Err(error) => {
                rejected += 1;
                candidates.push(BatchCandidateOutcome {
                    line: candidate.line,
                    candidate_name: name,
                    top_role: None,
                    match_score: None,
                    rejection: Some(error.to_string()),
                    recommendation: None,
                });
            }
        }
    }

    Ok(Json(BatchScreenResponse {
        today,
        total: candidates.len(),
        screened,
        rejected,
        candidates,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    const ROSTER_HEADER: &str =
        "Name,Date of Birth,Education,Percentage,Height (cm),Weight (kg),NCC,Qualifications,OLQ Score";

    fn screening_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid screening date")
    }

    #[tokio::test]
    async fn batch_screen_endpoint_reports_per_row_outcomes() {
        let request = BatchScreenRequest {
            roster_csv: format!(
                "{ROSTER_HEADER}\nRohan Mehta,2004-09-01,Graduation,82.5,175,70,Yes,NCC A Certificate,78\nYoung Hopeful,2010-05-20,10th Pass,45,,,,,\n"
            ),
            today: Some(screening_date()),
            include_recommendations: false,
        };

        let Json(body) = batch_screen_endpoint(Json(request))
            .await
            .expect("roster screens");

        assert_eq!(body.today, screening_date());
        assert_eq!(body.total, 2);
        assert_eq!(body.screened, 1);
        assert_eq!(body.rejected, 1);

        let first = &body.candidates[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.candidate_name, "Rohan Mehta");
        assert!(first.top_role.is_some());
        assert!(first.match_score.is_some());
        assert!(first.rejection.is_none());
        assert!(first.recommendation.is_none());

        let second = &body.candidates[1];
        assert_eq!(second.line, 3);
        assert!(second.top_role.is_none());
        let rejection = second.rejection.as_deref().expect("rejection reason");
        assert!(rejection.contains("neither questionnaire responses nor a prior score"));
    }

    #[tokio::test]
    async fn batch_screen_endpoint_can_include_full_recommendations() {
        let request = BatchScreenRequest {
            roster_csv: format!(
                "{ROSTER_HEADER}\nRohan Mehta,2004-09-01,Graduation,82.5,175,70,Yes,NCC A Certificate,78\n"
            ),
            today: Some(screening_date()),
            include_recommendations: true,
        };

        let Json(body) = batch_screen_endpoint(Json(request))
            .await
            .expect("roster screens");

        let recommendation = body.candidates[0]
            .recommendation
            .as_ref()
            .expect("full recommendation included");
        assert!(!recommendation.recommendations.is_empty());
        assert_eq!(
            body.candidates[0].top_role.as_deref(),
            Some(recommendation.recommendations[0].role_name.as_str())
        );
    }

    #[tokio::test]
    async fn batch_screen_endpoint_rejects_malformed_csv() {
        let request = BatchScreenRequest {
            roster_csv: "Just,Some,Columns\na,b,c\n".to_string(),
            today: Some(screening_date()),
            include_recommendations: false,
        };

        let error = batch_screen_endpoint(Json(request))
            .await
            .expect_err("csv is missing the roster columns");

        match error {
            AppError::Roster(_) => {}
            other => panic!("expected roster error, got {other:?}"),
        }
    }
}
