mod blend;
mod eligibility;
mod explain;
mod scoring;

pub use blend::{ExternalScorer, ExternalScorerError, LinearModelScorer};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::assessment::OlqAnalysis;
use super::catalog::RoleCatalog;
use super::domain::{CandidateProfile, RoleCategory, RoleMatch};

/// Upper bound on the ranked list handed back to candidates.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Ranked advisory produced for one candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub primary_category: RoleCategory,
    pub explanation: String,
    pub recommendations: Vec<RoleMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub olq_analysis: Option<OlqAnalysis>,
}

/// Stateless engine that screens, scores and ranks the role catalog.
pub struct RecommendationEngine {
    catalog: RoleCatalog,
    external: Option<Arc<dyn ExternalScorer>>,
}

impl RecommendationEngine {
    pub fn new(catalog: RoleCatalog) -> Self {
        Self {
            catalog,
            external: None,
        }
    }

    pub fn with_external_scorer(catalog: RoleCatalog, scorer: Arc<dyn ExternalScorer>) -> Self {
        Self {
            catalog,
            external: Some(scorer),
        }
    }

    /// Produce the ranked advisory for a sanitized profile.
    ///
    /// External scorer failures are logged and degrade to the deterministic
    /// score; a recommendation is always produced for a valid profile.
    pub fn evaluate(&self, profile: &CandidateProfile) -> CareerRecommendation {
        let mut matches: Vec<RoleMatch> = Vec::new();

        for role in eligibility::eligible_roles(profile, &self.catalog) {
            let (components, deterministic) = scoring::score_role(role, profile);
            // Narrative bands key off the deterministic score so the text
            // stays stable whatever scorer is wired in.
            let reasoning = explain::narrate_match(role, profile, deterministic);

            let match_score = match &self.external {
                Some(scorer) => match scorer.score(profile, role) {
                    Ok(external) => blend::blend(deterministic, external),
                    Err(error) => {
                        tracing::warn!(
                            role = role.name,
                            %error,
                            "external scorer failed, keeping deterministic score"
                        );
                        deterministic
                    }
                },
                None => deterministic,
            };

            matches.push(RoleMatch {
                role_name: role.name.to_string(),
                entry_scheme: role.entry_scheme.to_string(),
                category: role.category,
                match_score,
                min_age: role.min_age,
                max_age: role.max_age,
                education_requirement: role.education_requirement.to_string(),
                physical_standards: role.physical.view(),
                selection_process: role
                    .selection_process
                    .iter()
                    .map(|step| step.to_string())
                    .collect(),
                priority: role.priority,
                components,
                feature_importance: explain::feature_importance(role, profile),
                reasoning,
            });
        }

        rank(&mut matches);

        let (primary_category, explanation) = primary_guidance(profile.olq_score);
        CareerRecommendation {
            primary_category,
            explanation,
            recommendations: matches,
            olq_analysis: None,
        }
    }
}

/// Order by blended score descending, breaking ties on catalog priority.
/// The sort is stable, so fully tied roles keep their catalog order.
fn rank(matches: &mut Vec<RoleMatch>) {
    matches.sort_by(|left, right| {
        right
            .match_score
            .total_cmp(&left.match_score)
            .then_with(|| left.priority.cmp(&right.priority))
    });
    matches.truncate(MAX_RECOMMENDATIONS);
}

fn primary_guidance(olq_score: f32) -> (RoleCategory, String) {
    if olq_score < 50.0 {
        (
            RoleCategory::Enlisted,
            format!(
                "Based on your OLQ score of {olq_score:.1}%, enlisted roles are recommended. \
                 These positions focus on operational excellence and provide structured career growth. \
                 You can develop leadership skills and potentially transition to officer roles later."
            ),
        )
    } else if olq_score >= 70.0 {
        (
            RoleCategory::CivilServices,
            format!(
                "Your OLQ score of {olq_score:.1}% indicates strong leadership potential. \
                 You are well-suited for both defence officer entries and civil services. \
                 Civil services are prioritized based on your excellent analytical and decision-making abilities."
            ),
        )
    } else {
        (
            RoleCategory::Officer,
            format!(
                "Your OLQ score of {olq_score:.1}% demonstrates good leadership qualities. \
                 Officer entries in defence forces are recommended based on your profile. \
                 Continue developing your leadership skills for optimal success."
            ),
        )
    }
}
