//! Candidate intake, OLQ assessment, and career recommendation workflow.
//!
//! Submissions are validated by the intake guard, scored against the officer-like
//! quality question bank, and screened against the role catalog. The service facade
//! persists ranked recommendations and hands the top role to the study planner.

pub(crate) mod assessment;
pub(crate) mod catalog;
pub mod domain;
pub(crate) mod intake;
pub(crate) mod recommendation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessment::{OlqAnalysis, OlqBand, OlqQuestionBank, OlqQuestionView};
pub use catalog::{PhysicalStandard, RoleCatalog, RoleDefinition};
pub use domain::{
    CandidateProfile, CandidateSubmission, EducationDetails, EducationLevel, Gender, OlqResponse,
    PersonalDetails, PhysicalDetails, PlanId, RecommendationId, RoleCategory, RoleMatch,
    ScoreComponent, ScoreFactor, StudyPlanRequest,
};
pub use intake::{IntakeError, IntakeGuard, IntakeOutcome, IntakePolicy};
pub use recommendation::{
    CareerRecommendation, ExternalScorer, ExternalScorerError, LinearModelScorer,
    RecommendationEngine, MAX_RECOMMENDATIONS,
};
pub use repository::{
    RecommendationRecord, RecommendationRepository, RecommendationView, RepositoryError,
    StudyPlanRecord, StudyPlanRepository, StudyPlanView,
};
pub use router::guidance_router;
pub use service::{GuidanceService, GuidanceServiceError};
