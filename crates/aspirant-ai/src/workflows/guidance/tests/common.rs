use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::guidance::assessment::OlqQuestionBank;
use crate::workflows::guidance::domain::{
    CandidateProfile, CandidateSubmission, EducationDetails, EducationLevel, Gender, OlqResponse,
    PersonalDetails, PhysicalDetails, PlanId, RecommendationId,
};
use crate::workflows::guidance::intake::IntakeGuard;
use crate::workflows::guidance::repository::{
    RecommendationRecord, RecommendationRepository, RepositoryError, StudyPlanRecord,
    StudyPlanRepository,
};
use crate::workflows::guidance::{
    guidance_router, GuidanceService, RecommendationEngine, RoleCatalog,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

/// Graduate candidate with a strong, fully answered questionnaire.
pub(super) fn submission() -> CandidateSubmission {
    CandidateSubmission {
        personal: PersonalDetails {
            full_name: "Arjun Nair".to_string(),
            email: "arjun.nair@example.in".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2004, 9, 1).expect("valid date"),
            gender: Gender::Male,
            state: "Kerala".to_string(),
            city: "Kochi".to_string(),
        },
        physical: PhysicalDetails {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            eyesight_left: Some(6.0),
            eyesight_right: Some(6.0),
            has_medical_conditions: false,
        },
        education: EducationDetails {
            level: EducationLevel::Bachelors,
            academic_percentage: 82.0,
            stream: Some("Science".to_string()),
            graduation_year: Some(2025),
            has_ncc: true,
            additional_qualifications: vec!["State-level athletics".to_string()],
        },
        olq_responses: mixed_responses(),
        olq_score: None,
    }
}

/// Candidate far past every catalog age window; screens to an empty list.
pub(super) fn over_age_submission() -> CandidateSubmission {
    let mut submission = submission();
    submission.personal.date_of_birth = NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date");
    submission
}

pub(super) fn all_correct_responses() -> Vec<OlqResponse> {
    (1..=10)
        .map(|id| OlqResponse {
            question_id: id,
            selected_option: 1,
        })
        .collect()
}

/// Seven correct answers, one adjacent pick, two clear misses: scores 75.0.
pub(super) fn mixed_responses() -> Vec<OlqResponse> {
    let mut responses: Vec<OlqResponse> = (1..=7)
        .map(|id| OlqResponse {
            question_id: id,
            selected_option: 1,
        })
        .collect();
    responses.push(OlqResponse {
        question_id: 8,
        selected_option: 2,
    });
    responses.push(OlqResponse {
        question_id: 9,
        selected_option: 3,
    });
    responses.push(OlqResponse {
        question_id: 10,
        selected_option: 3,
    });
    responses
}

/// Sanitized graduate profile sitting in the CDS window.
pub(super) fn candidate_profile() -> CandidateProfile {
    CandidateProfile {
        olq_score: 78.0,
        age_years: 21.5,
        education: EducationLevel::Bachelors,
        academic_percentage: 82.0,
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        has_ncc: true,
        additional_qualifications: 1,
    }
}

/// School leaver inside the NDA window only.
pub(super) fn school_leaver_profile(olq_score: f32) -> CandidateProfile {
    CandidateProfile {
        olq_score,
        age_years: 17.0,
        education: EducationLevel::Intermediate,
        academic_percentage: 68.0,
        height_cm: Some(165.0),
        weight_kg: Some(58.0),
        has_ncc: false,
        additional_qualifications: 0,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RoleCatalog::standard())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn bank() -> OlqQuestionBank {
    OlqQuestionBank::standard()
}

pub(super) fn build_service() -> (
    GuidanceService<MemoryRecommendations, MemoryPlans>,
    Arc<MemoryRecommendations>,
    Arc<MemoryPlans>,
) {
    let recommendations = Arc::new(MemoryRecommendations::default());
    let plans = Arc::new(MemoryPlans::default());
    let service = GuidanceService::new(recommendations.clone(), plans.clone());
    (service, recommendations, plans)
}

pub(super) fn guidance_router_with_service(
    service: GuidanceService<MemoryRecommendations, MemoryPlans>,
) -> axum::Router {
    guidance_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRecommendations {
    pub(super) records: Arc<Mutex<HashMap<RecommendationId, RecommendationRecord>>>,
}

impl RecommendationRepository for MemoryRecommendations {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.recommendation_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.recommendation_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        id: &RecommendationId,
    ) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryPlans {
    pub(super) records: Arc<Mutex<HashMap<PlanId, StudyPlanRecord>>>,
}

impl StudyPlanRepository for MemoryPlans {
    fn insert(&self, record: StudyPlanRecord) -> Result<StudyPlanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.plan_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.plan_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<StudyPlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRecommendations;

impl RecommendationRepository for UnavailableRecommendations {
    fn insert(
        &self,
        _record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &RecommendationId,
    ) -> Result<Option<RecommendationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
