use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::super::catalog::RoleDefinition;
use super::super::domain::CandidateProfile;

const DETERMINISTIC_SHARE: f32 = 0.6;
const EXTERNAL_SHARE: f32 = 0.4;

/// Number of profile features the linear artifact must weight.
const FEATURE_COUNT: usize = 6;

/// Failures surfaced by a pluggable scorer. The engine treats every variant
/// as survivable and falls back to the deterministic score.
#[derive(Debug, thiserror::Error)]
pub enum ExternalScorerError {
    #[error("model artifact unavailable: {0}")]
    Unavailable(String),
    #[error("model rejected the candidate features: {0}")]
    Rejected(String),
}

/// Optional refinement layered over the deterministic rubric.
pub trait ExternalScorer: Send + Sync {
    /// Score a candidate for one role on the same 0-100 scale the
    /// deterministic rubric uses.
    fn score(
        &self,
        profile: &CandidateProfile,
        role: &RoleDefinition,
    ) -> Result<f32, ExternalScorerError>;
}

/// Weighted blend of the two scores, deterministic side dominant.
pub(crate) fn blend(deterministic: f32, external: f32) -> f32 {
    deterministic * DETERMINISTIC_SHARE + external * EXTERNAL_SHARE
}

#[derive(Debug, Deserialize)]
struct LinearModelArtifact {
    weights: Vec<f32>,
    #[serde(default)]
    bias: f32,
}

/// Logistic scorer over a fixed feature vector, loaded from a JSON artifact
/// of the form `{"weights": [...], "bias": ...}`.
#[derive(Debug, Clone)]
pub struct LinearModelScorer {
    weights: [f32; FEATURE_COUNT],
    bias: f32,
}

impl LinearModelScorer {
    pub fn from_path(path: &Path) -> Result<Self, ExternalScorerError> {
        let file = File::open(path)
            .map_err(|error| ExternalScorerError::Unavailable(format!("{}: {error}", path.display())))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ExternalScorerError> {
        let artifact: LinearModelArtifact = serde_json::from_reader(reader)
            .map_err(|error| ExternalScorerError::Rejected(error.to_string()))?;

        let weights: [f32; FEATURE_COUNT] =
            artifact.weights.try_into().map_err(|found: Vec<f32>| {
                ExternalScorerError::Rejected(format!(
                    "expected {FEATURE_COUNT} weights, found {}",
                    found.len()
                ))
            })?;

        Ok(Self {
            weights,
            bias: artifact.bias,
        })
    }

    /// Normalised features in the order the artifact was trained with.
    /// Missing measurements fall back to population-typical values.
    fn feature_vector(profile: &CandidateProfile) -> [f32; FEATURE_COUNT] {
        [
            profile.olq_score / 100.0,
            profile.academic_percentage / 100.0,
            if profile.has_ncc { 1.0 } else { 0.0 },
            f32::from(profile.additional_qualifications) / 5.0,
            profile.height_cm.map_or(0.9, |height| height / 180.0),
            profile.weight_kg.map_or(0.8, |weight| weight / 80.0),
        ]
    }
}

impl ExternalScorer for LinearModelScorer {
    fn score(
        &self,
        profile: &CandidateProfile,
        _role: &RoleDefinition,
    ) -> Result<f32, ExternalScorerError> {
        let features = Self::feature_vector(profile);
        let activation: f32 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(weight, feature)| weight * feature)
            .sum::<f32>()
            + self.bias;

        if !activation.is_finite() {
            return Err(ExternalScorerError::Rejected(
                "activation is not finite".to_string(),
            ));
        }

        let probability = 1.0 / (1.0 + (-activation).exp());
        Ok(probability * 100.0)
    }
}
