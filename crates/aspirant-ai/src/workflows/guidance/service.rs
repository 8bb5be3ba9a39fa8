use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::assessment::{OlqQuestionBank, OlqQuestionView};
use super::catalog::RoleCatalog;
use super::domain::{CandidateSubmission, PlanId, RecommendationId, StudyPlanRequest};
use super::intake::{IntakeError, IntakeGuard};
use super::recommendation::RecommendationEngine;
use super::repository::{
    RecommendationRecord, RecommendationRepository, RepositoryError, StudyPlanRecord,
    StudyPlanRepository,
};
use crate::workflows::planning::{PlanningError, StudyPlanner};

/// Service composing the intake guard, question bank, recommendation engine
/// and study planner over pluggable storage.
pub struct GuidanceService<R, P> {
    guard: Arc<IntakeGuard>,
    bank: Arc<OlqQuestionBank>,
    engine: Arc<RecommendationEngine>,
    planner: Arc<StudyPlanner>,
    recommendations: Arc<R>,
    plans: Arc<P>,
}

static RECOMMENDATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PLAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_recommendation_id() -> RecommendationId {
    let id = RECOMMENDATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecommendationId(format!("rec-{id:06}"))
}

fn next_plan_id() -> PlanId {
    let id = PLAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PlanId(format!("plan-{id:06}"))
}

impl<R, P> GuidanceService<R, P>
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    pub fn new(recommendations: Arc<R>, plans: Arc<P>) -> Self {
        Self::with_engine(
            recommendations,
            plans,
            RecommendationEngine::new(RoleCatalog::standard()),
        )
    }

    /// Wire in a pre-built engine, e.g. one carrying an external scorer.
    pub fn with_engine(
        recommendations: Arc<R>,
        plans: Arc<P>,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            guard: Arc::new(IntakeGuard::default()),
            bank: Arc::new(OlqQuestionBank::standard()),
            engine: Arc::new(engine),
            planner: Arc::new(StudyPlanner::standard()),
            recommendations,
            plans,
        }
    }

    /// Validate a submission, rank the catalog for it, and persist the
    /// resulting advisory.
    pub fn recommend(
        &self,
        submission: CandidateSubmission,
        today: NaiveDate,
    ) -> Result<RecommendationRecord, GuidanceServiceError> {
        let outcome = self
            .guard
            .profile_from_submission(submission, today, &self.bank)?;

        let mut recommendation = self.engine.evaluate(&outcome.profile);
        recommendation.olq_analysis = outcome.olq_analysis;

        let record = RecommendationRecord {
            recommendation_id: next_recommendation_id(),
            candidate_name: outcome.candidate_name,
            profile: outcome.profile,
            recommendation,
            generated_on: today,
        };

        let stored = self.recommendations.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored recommendation for API responses.
    pub fn recommendation(
        &self,
        id: &RecommendationId,
    ) -> Result<RecommendationRecord, GuidanceServiceError> {
        let record = self
            .recommendations
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Build and persist a study plan anchored to a stored recommendation's
    /// top-ranked role.
    pub fn build_study_plan(
        &self,
        request: StudyPlanRequest,
        today: NaiveDate,
    ) -> Result<StudyPlanRecord, GuidanceServiceError> {
        let record = self
            .recommendations
            .fetch(&request.recommendation_id)?
            .ok_or(RepositoryError::NotFound)?;

        let top_match = record
            .top_match()
            .ok_or(GuidanceServiceError::NoRankedRoles)?;

        let plan = self.planner.build(
            &top_match.role_name,
            request.exam_code.as_deref(),
            today,
            request.target_date,
            request.hours_per_day,
        )?;

        let stored = self.plans.insert(StudyPlanRecord {
            plan_id: next_plan_id(),
            recommendation_id: record.recommendation_id.clone(),
            role_name: top_match.role_name.clone(),
            target_date: request.target_date,
            plan,
            created_on: today,
        })?;
        Ok(stored)
    }

    /// Fetch a stored study plan for API responses.
    pub fn study_plan(&self, id: &PlanId) -> Result<StudyPlanRecord, GuidanceServiceError> {
        let record = self.plans.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Questionnaire served to candidates, answer key withheld.
    pub fn questionnaire(&self) -> Vec<OlqQuestionView> {
        self.bank.question_views()
    }

    pub fn planner(&self) -> &StudyPlanner {
        &self.planner
    }
}

/// Error raised by the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Planning(#[from] PlanningError),
    #[error("recommendation holds no ranked roles to plan against")]
    NoRankedRoles,
}
