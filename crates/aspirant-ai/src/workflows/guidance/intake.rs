use chrono::NaiveDate;

use super::assessment::{OlqAnalysis, OlqQuestionBank};
use super::domain::{CandidateProfile, CandidateSubmission};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("full name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("date of birth {dob} is not before {today}")]
    BirthDateNotInPast { dob: NaiveDate, today: NaiveDate },
    #[error("height {found} cm outside accepted range {min}-{max} cm")]
    HeightOutOfRange { found: f32, min: f32, max: f32 },
    #[error("weight {found} kg outside accepted range {min}-{max} kg")]
    WeightOutOfRange { found: f32, min: f32, max: f32 },
    #[error("eyesight rating {0} outside the 0-10 scale")]
    EyesightOutOfRange(f32),
    #[error("academic percentage {0} outside the 0-100 scale")]
    PercentageOutOfRange(f32),
    #[error("graduation year {found} outside accepted range {min}-{max}")]
    GraduationYearOutOfRange { found: i32, min: i32, max: i32 },
    #[error("questionnaire score {0} outside the 0-100 scale")]
    OlqScoreOutOfRange(f32),
    #[error("submission carries neither questionnaire responses nor a prior score")]
    MissingOlqData,
}

const DEFAULT_HEIGHT_RANGE_CM: (f32, f32) = (140.0, 220.0);
const DEFAULT_WEIGHT_RANGE_KG: (f32, f32) = (40.0, 150.0);
const DEFAULT_MIN_NAME_CHARS: usize = 2;
const DEFAULT_GRADUATION_YEARS: (i32, i32) = (1990, 2030);

/// Mean solar-year length keeps fractional ages stable across leap years.
const DAYS_PER_YEAR: f32 = 365.25;

/// Policy dials backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    height_range_cm: (f32, f32),
    weight_range_kg: (f32, f32),
    min_name_chars: usize,
    graduation_years: (i32, i32),
}

impl IntakePolicy {
    pub fn new(height_range_cm: (f32, f32), weight_range_kg: (f32, f32)) -> Self {
        Self {
            height_range_cm: sanitize_range(height_range_cm, DEFAULT_HEIGHT_RANGE_CM),
            weight_range_kg: sanitize_range(weight_range_kg, DEFAULT_WEIGHT_RANGE_KG),
            min_name_chars: DEFAULT_MIN_NAME_CHARS,
            graduation_years: DEFAULT_GRADUATION_YEARS,
        }
    }

    pub fn height_range_cm(&self) -> (f32, f32) {
        self.height_range_cm
    }

    pub fn weight_range_kg(&self) -> (f32, f32) {
        self.weight_range_kg
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT_RANGE_CM, DEFAULT_WEIGHT_RANGE_KG)
    }
}

fn sanitize_range(candidate: (f32, f32), fallback: (f32, f32)) -> (f32, f32) {
    let (low, high) = candidate;
    if low.is_finite() && high.is_finite() && low < high {
        candidate
    } else {
        fallback
    }
}

/// Result of a successful intake pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeOutcome {
    pub candidate_name: String,
    pub profile: CandidateProfile,
    pub olq_analysis: Option<OlqAnalysis>,
}

/// Guard responsible for producing `CandidateProfile` instances.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::with_policy(IntakePolicy::default())
    }
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound submission into a sanitized candidate profile.
    ///
    /// When raw questionnaire responses are present they are scored against
    /// the bank and produce a trait analysis; otherwise a pre-scored
    /// percentage is accepted as-is.
    pub fn profile_from_submission(
        &self,
        submission: CandidateSubmission,
        today: NaiveDate,
        bank: &OlqQuestionBank,
    ) -> Result<IntakeOutcome, IntakeError> {
        let candidate_name = submission.personal.full_name.trim().to_string();
        if candidate_name.chars().count() < self.policy.min_name_chars {
            return Err(IntakeError::NameTooShort {
                min: self.policy.min_name_chars,
            });
        }

        let dob = submission.personal.date_of_birth;
        if dob >= today {
            return Err(IntakeError::BirthDateNotInPast { dob, today });
        }

        let (min_height, max_height) = self.policy.height_range_cm;
        if let Some(height) = submission.physical.height_cm {
            if !(min_height..=max_height).contains(&height) {
                return Err(IntakeError::HeightOutOfRange {
                    found: height,
                    min: min_height,
                    max: max_height,
                });
            }
        }

        let (min_weight, max_weight) = self.policy.weight_range_kg;
        if let Some(weight) = submission.physical.weight_kg {
            if !(min_weight..=max_weight).contains(&weight) {
                return Err(IntakeError::WeightOutOfRange {
                    found: weight,
                    min: min_weight,
                    max: max_weight,
                });
            }
        }

        for rating in [
            submission.physical.eyesight_left,
            submission.physical.eyesight_right,
        ]
        .into_iter()
        .flatten()
        {
            if !(0.0..=10.0).contains(&rating) {
                return Err(IntakeError::EyesightOutOfRange(rating));
            }
        }

        let percentage = submission.education.academic_percentage;
        if !(0.0..=100.0).contains(&percentage) {
            return Err(IntakeError::PercentageOutOfRange(percentage));
        }

        let (min_year, max_year) = self.policy.graduation_years;
        if let Some(year) = submission.education.graduation_year {
            if !(min_year..=max_year).contains(&year) {
                return Err(IntakeError::GraduationYearOutOfRange {
                    found: year,
                    min: min_year,
                    max: max_year,
                });
            }
        }

        let (olq_score, olq_analysis) = if !submission.olq_responses.is_empty() {
            let analysis = bank.analysis(&submission.olq_responses);
            (analysis.score, Some(analysis))
        } else if let Some(score) = submission.olq_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(IntakeError::OlqScoreOutOfRange(score));
            }
            (score, None)
        } else {
            return Err(IntakeError::MissingOlqData);
        };

        let age_years = (today - dob).num_days() as f32 / DAYS_PER_YEAR;
        let qualification_count =
            u8::try_from(submission.education.additional_qualifications.len()).unwrap_or(u8::MAX);

        Ok(IntakeOutcome {
            candidate_name,
            profile: CandidateProfile {
                olq_score,
                age_years,
                education: submission.education.level,
                academic_percentage: percentage,
                height_cm: submission.physical.height_cm,
                weight_kg: submission.physical.weight_kg,
                has_ncc: submission.education.has_ncc,
                additional_qualifications: qualification_count,
            },
            olq_analysis,
        })
    }
}
