use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, PlanId, RecommendationId, RoleMatch};
use super::recommendation::CareerRecommendation;
use crate::workflows::planning::StudyPlan;

/// Repository record pairing the sanitized profile with its advisory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub recommendation_id: RecommendationId,
    pub candidate_name: String,
    pub profile: CandidateProfile,
    pub recommendation: CareerRecommendation,
    pub generated_on: NaiveDate,
}

impl RecommendationRecord {
    /// Best ranked role, when the screening produced any.
    pub fn top_match(&self) -> Option<&RoleMatch> {
        self.recommendation.recommendations.first()
    }

    pub fn view(&self) -> RecommendationView {
        RecommendationView {
            recommendation_id: self.recommendation_id.clone(),
            candidate_name: self.candidate_name.clone(),
            olq_score: self.profile.olq_score,
            recommendation: self.recommendation.clone(),
            generated_on: self.generated_on,
        }
    }
}

/// Repository record for a generated study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanRecord {
    pub plan_id: PlanId,
    pub recommendation_id: RecommendationId,
    pub role_name: String,
    pub target_date: NaiveDate,
    pub plan: StudyPlan,
    pub created_on: NaiveDate,
}

impl StudyPlanRecord {
    pub fn view(&self) -> StudyPlanView {
        StudyPlanView {
            plan_id: self.plan_id.clone(),
            recommendation_id: self.recommendation_id.clone(),
            role_name: self.role_name.clone(),
            target_date: self.target_date,
            plan: self.plan.clone(),
            created_on: self.created_on,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait RecommendationRepository: Send + Sync {
    fn insert(&self, record: RecommendationRecord)
        -> Result<RecommendationRecord, RepositoryError>;
    fn fetch(&self, id: &RecommendationId) -> Result<Option<RecommendationRecord>, RepositoryError>;
}

/// Storage abstraction for persisted study plans.
pub trait StudyPlanRepository: Send + Sync {
    fn insert(&self, record: StudyPlanRecord) -> Result<StudyPlanRecord, RepositoryError>;
    fn fetch(&self, id: &PlanId) -> Result<Option<StudyPlanRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Candidate-facing projection of a stored recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub recommendation_id: RecommendationId,
    pub candidate_name: String,
    pub olq_score: f32,
    #[serde(flatten)]
    pub recommendation: CareerRecommendation,
    pub generated_on: NaiveDate,
}

/// Candidate-facing projection of a stored study plan.
#[derive(Debug, Clone, Serialize)]
pub struct StudyPlanView {
    pub plan_id: PlanId,
    pub recommendation_id: RecommendationId,
    pub role_name: String,
    pub target_date: NaiveDate,
    #[serde(flatten)]
    pub plan: StudyPlan,
    pub created_on: NaiveDate,
}
