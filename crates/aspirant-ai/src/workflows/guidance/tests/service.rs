use std::sync::Arc;

use super::common::*;
use chrono::NaiveDate;

use crate::workflows::guidance::domain::StudyPlanRequest;
use crate::workflows::guidance::repository::RepositoryError;
use crate::workflows::guidance::{GuidanceService, GuidanceServiceError, RecommendationId};

fn plan_request(id: &RecommendationId, exam_code: Option<&str>) -> StudyPlanRequest {
    StudyPlanRequest {
        recommendation_id: id.clone(),
        target_date: NaiveDate::from_ymd_opt(2026, 6, 29).expect("valid date"),
        hours_per_day: 4.0,
        exam_code: exam_code.map(str::to_string),
    }
}

#[test]
fn recommend_assigns_sequenced_identifiers() {
    let (service, recommendations, _) = build_service();

    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");

    assert!(record.recommendation_id.0.starts_with("rec-"));
    assert_eq!(record.recommendation_id.0.len(), 10);
    assert_eq!(record.candidate_name, "Arjun Nair");
    assert_eq!(record.generated_on, today());
    assert!(record.recommendation.olq_analysis.is_some());
    assert!(recommendations
        .records
        .lock()
        .expect("lock")
        .contains_key(&record.recommendation_id));
}

#[test]
fn recommendation_lookup_round_trips() {
    let (service, _, _) = build_service();
    let stored = service
        .recommend(submission(), today())
        .expect("recommendation stored");

    let fetched = service
        .recommendation(&stored.recommendation_id)
        .expect("lookup succeeds");

    assert_eq!(fetched.recommendation_id, stored.recommendation_id);
    assert_eq!(fetched.candidate_name, stored.candidate_name);
    assert_eq!(
        fetched.recommendation.recommendations.len(),
        stored.recommendation.recommendations.len()
    );
}

#[test]
fn missing_recommendations_map_to_not_found() {
    let (service, _, _) = build_service();

    match service.recommendation(&RecommendationId("rec-unknown".to_string())) {
        Err(GuidanceServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn intake_failures_never_reach_storage() {
    let (service, recommendations, _) = build_service();
    let mut bad_submission = submission();
    bad_submission.education.academic_percentage = 140.0;

    match service.recommend(bad_submission, today()) {
        Err(GuidanceServiceError::Intake(_)) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }
    assert!(recommendations.records.lock().expect("lock").is_empty());
}

#[test]
fn storage_outage_surfaces_as_repository_error() {
    let service = GuidanceService::new(
        Arc::new(UnavailableRecommendations),
        Arc::new(MemoryPlans::default()),
    );

    match service.recommend(submission(), today()) {
        Err(GuidanceServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn study_plans_anchor_to_the_top_ranked_role() {
    let (service, _, plans) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");
    let top_role = record.top_match().expect("roles ranked").role_name.clone();

    let plan = service
        .build_study_plan(plan_request(&record.recommendation_id, None), today())
        .expect("plan built");

    assert!(plan.plan_id.0.starts_with("plan-"));
    assert_eq!(plan.recommendation_id, record.recommendation_id);
    assert_eq!(plan.role_name, top_role);
    assert_eq!(plan.plan.total_days, 120);
    assert!((plan.plan.total_hours - 480.0).abs() < f32::EPSILON);
    assert!(plans
        .records
        .lock()
        .expect("lock")
        .contains_key(&plan.plan_id));
}

#[test]
fn exam_override_replaces_the_role_syllabus() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");

    let plan = service
        .build_study_plan(plan_request(&record.recommendation_id, Some("CDS")), today())
        .expect("plan built");

    let modules: Vec<&str> = plan
        .plan
        .modules
        .iter()
        .map(|module| module.module_name.as_str())
        .collect();
    assert_eq!(
        modules,
        vec!["English", "General Knowledge", "Elementary Mathematics"]
    );
}

#[test]
fn unknown_exam_overrides_are_rejected() {
    let (service, _, plans) = build_service();
    let record = service
        .recommend(submission(), today())
        .expect("recommendation stored");

    match service.build_study_plan(plan_request(&record.recommendation_id, Some("RRB_NTPC")), today()) {
        Err(GuidanceServiceError::Planning(_)) => {}
        other => panic!("expected planning rejection, got {other:?}"),
    }
    assert!(plans.records.lock().expect("lock").is_empty());
}

#[test]
fn empty_screenings_cannot_anchor_plans() {
    let (service, _, _) = build_service();
    let record = service
        .recommend(over_age_submission(), today())
        .expect("recommendation stored");
    assert!(record.top_match().is_none());

    match service.build_study_plan(plan_request(&record.recommendation_id, None), today()) {
        Err(GuidanceServiceError::NoRankedRoles) => {}
        other => panic!("expected unplannable recommendation, got {other:?}"),
    }
}

#[test]
fn questionnaire_exposes_views_without_answers() {
    let (service, _, _) = build_service();

    let questions = service.questionnaire();
    assert_eq!(questions.len(), 10);
}
