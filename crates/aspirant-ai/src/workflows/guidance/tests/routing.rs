use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::guidance::domain::StudyPlanRequest;
use crate::workflows::guidance::{GuidanceService, RecommendationId};

fn post_json(uri: &str, body: Vec<u8>) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .expect("request")
}

fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request")
}

fn future_date(days: i64) -> chrono::NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

#[tokio::test]
async fn recommend_route_returns_created_advisory() {
    let (service, _, _) = build_service();
    let router = guidance_router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/guidance/recommendations",
            serde_json::to_vec(&submission()).expect("serialize submission"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    let id = payload
        .get("recommendation_id")
        .and_then(Value::as_str)
        .expect("id present");
    assert!(id.starts_with("rec-"));
    assert!(payload.get("recommendations").is_some_and(Value::is_array));
    assert!(payload.get("primary_category").is_some());
    assert!(payload.get("olq_analysis").is_some());
}

#[tokio::test]
async fn recommend_handler_rejects_invalid_payloads() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let mut bad_submission = submission();
    bad_submission.education.academic_percentage = 140.0;

    let response = crate::workflows::guidance::router::recommend_handler::<
        MemoryRecommendations,
        MemoryPlans,
    >(State(service), axum::Json(bad_submission))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn recommend_handler_reports_storage_outage() {
    let service = Arc::new(GuidanceService::new(
        Arc::new(UnavailableRecommendations),
        Arc::new(MemoryPlans::default()),
    ));

    let response = crate::workflows::guidance::router::recommend_handler::<
        UnavailableRecommendations,
        MemoryPlans,
    >(State(service), axum::Json(submission()))
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn recommendation_route_round_trips() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");
    let router = guidance_router_with_service(service);

    let response = router
        .oneshot(get(&format!(
            "/api/v1/guidance/recommendations/{}",
            record.recommendation_id.0
        )))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("candidate_name").and_then(Value::as_str),
        Some("Arjun Nair")
    );
    assert!(payload.get("recommendations").is_some_and(Value::is_array));
}

#[tokio::test]
async fn missing_recommendations_are_not_found() {
    let (service, _, _) = build_service();
    let router = guidance_router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/guidance/recommendations/rec-does-not-exist"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("not found"));
}

#[tokio::test]
async fn questionnaire_route_serves_the_bank() {
    let (service, _, _) = build_service();
    let router = guidance_router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/guidance/questions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total").and_then(Value::as_u64), Some(10));
    let questions = payload
        .get("questions")
        .and_then(Value::as_array)
        .expect("question list");
    assert_eq!(questions.len(), 10);
    assert!(questions[0].get("correct_option").is_none());
}

#[tokio::test]
async fn study_plan_route_builds_from_the_top_match() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");
    let top_role = record.top_match().expect("roles ranked").role_name.clone();
    let router = guidance_router_with_service(service);

    let request = StudyPlanRequest {
        recommendation_id: record.recommendation_id.clone(),
        target_date: future_date(120),
        hours_per_day: 4.0,
        exam_code: None,
    };
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/guidance/study-plans",
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    let plan_id = payload
        .get("plan_id")
        .and_then(Value::as_str)
        .expect("plan id present");
    assert!(plan_id.starts_with("plan-"));
    assert_eq!(
        payload.get("role_name").and_then(Value::as_str),
        Some(top_role.as_str())
    );
    assert!(payload
        .get("daily_schedule")
        .and_then(Value::as_array)
        .is_some_and(|days| !days.is_empty()));
    assert!(payload
        .get("milestones")
        .and_then(Value::as_array)
        .is_some_and(|milestones| !milestones.is_empty()));

    let fetched = router
        .oneshot(get(&format!("/api/v1/guidance/study-plans/{plan_id}")))
        .await
        .expect("route executes");
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[tokio::test]
async fn past_target_dates_are_rejected() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");
    let router = guidance_router_with_service(service);

    let request = StudyPlanRequest {
        recommendation_id: record.recommendation_id.clone(),
        target_date: future_date(-5),
        hours_per_day: 4.0,
        exam_code: None,
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/guidance/study-plans",
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_exam_codes_are_not_found() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");
    let router = guidance_router_with_service(service);

    let request = StudyPlanRequest {
        recommendation_id: record.recommendation_id.clone(),
        target_date: future_date(120),
        hours_per_day: 4.0,
        exam_code: Some("RRB_NTPC".to_string()),
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/guidance/study-plans",
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn plans_for_missing_recommendations_are_not_found() {
    let (service, _, _) = build_service();
    let router = guidance_router_with_service(service);

    let request = StudyPlanRequest {
        recommendation_id: RecommendationId("rec-does-not-exist".to_string()),
        target_date: future_date(120),
        hours_per_day: 4.0,
        exam_code: None,
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/guidance/study-plans",
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_screenings_cannot_anchor_plans() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(over_age_submission(), today())
        .expect("recommendation stored");
    assert!(record.top_match().is_none());
    let router = guidance_router_with_service(service);

    let request = StudyPlanRequest {
        recommendation_id: record.recommendation_id.clone(),
        target_date: future_date(120),
        hours_per_day: 4.0,
        exam_code: None,
    };
    let response = router
        .oneshot(post_json(
            "/api/v1/guidance/study-plans",
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn exam_catalog_routes_list_and_detail() {
    let (service, _, _) = build_service();
    let router = guidance_router_with_service(service);

    let listing = router
        .clone()
        .oneshot(get("/api/v1/guidance/exams"))
        .await
        .expect("route executes");
    assert_eq!(listing.status(), StatusCode::OK);
    let payload = read_json_body(listing).await;
    assert_eq!(
        payload.get("exams").and_then(Value::as_array).map(Vec::len),
        Some(6)
    );

    let details = router
        .clone()
        .oneshot(get("/api/v1/guidance/exams/NDA"))
        .await
        .expect("route executes");
    assert_eq!(details.status(), StatusCode::OK);
    let payload = read_json_body(details).await;
    assert_eq!(payload.get("exam_code").and_then(Value::as_str), Some("NDA"));
    assert_eq!(
        payload
            .get("subjects")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(5)
    );

    let lowercase = router
        .oneshot(get("/api/v1/guidance/exams/nda"))
        .await
        .expect("route executes");
    assert_eq!(lowercase.status(), StatusCode::NOT_FOUND);
}
