use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored career recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationId(pub String);

/// Identifier wrapper for generated study plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub String);

/// Raw candidate payload collected by the intake form before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub personal: PersonalDetails,
    pub physical: PhysicalDetails,
    pub education: EducationDetails,
    #[serde(default)]
    pub olq_responses: Vec<OlqResponse>,
    /// Pre-scored OLQ percentage for candidates assessed offline.
    #[serde(default)]
    pub olq_score: Option<f32>,
}

/// Identity block captured uniformly for every candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-declared physical measurements; height and weight are optional because
/// many candidates complete the medical step after the first assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDetails {
    pub height_cm: Option<f32>,
    pub weight_kg: Option<f32>,
    #[serde(default)]
    pub eyesight_left: Option<f32>,
    #[serde(default)]
    pub eyesight_right: Option<f32>,
    #[serde(default)]
    pub has_medical_conditions: bool,
}

/// Academic record and service-adjacent credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    pub level: EducationLevel,
    pub academic_percentage: f32,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub has_ncc: bool,
    #[serde(default)]
    pub additional_qualifications: Vec<String>,
}

/// Recognised academic attainment tiers, ordered from school leaving upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Intermediate,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationLevel {
    /// Rank used when comparing attainment against a role requirement.
    pub const fn ordinal(self) -> u8 {
        match self {
            EducationLevel::HighSchool => 1,
            EducationLevel::Intermediate => 2,
            EducationLevel::Bachelors => 3,
            EducationLevel::Masters => 4,
            EducationLevel::Doctorate => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "10th Standard",
            EducationLevel::Intermediate => "12th Standard",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Doctorate => "Doctorate",
        }
    }
}

/// One answered item from the officer-like-qualities questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OlqResponse {
    pub question_id: u8,
    /// Zero-based index into the question's option list.
    pub selected_option: u8,
}

/// The sanitized candidate model every scoring component consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub olq_score: f32,
    pub age_years: f32,
    pub education: EducationLevel,
    pub academic_percentage: f32,
    pub height_cm: Option<f32>,
    pub weight_kg: Option<f32>,
    pub has_ncc: bool,
    pub additional_qualifications: u8,
}

/// Broad families the role catalog divides into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Officer,
    Enlisted,
    CivilServices,
}

impl RoleCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RoleCategory::Officer => "officer",
            RoleCategory::Enlisted => "enlisted",
            RoleCategory::CivilServices => "civil_services",
        }
    }
}

/// Factors permitted in the match rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Olq,
    Age,
    Education,
    Physical,
    Qualifications,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::Olq => "OLQ Score",
            ScoreFactor::Age => "Age Suitability",
            ScoreFactor::Education => "Education Level",
            ScoreFactor::Physical => "Physical Fitness",
            ScoreFactor::Qualifications => "Additional Qualifications",
        }
    }
}

/// One weighted term of a role's deterministic match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: f32,
    pub value: f32,
    pub notes: String,
}

/// Owned snapshot of a role's physical benchmarks for response payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalStandardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_male_cm: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_female_cm: Option<f32>,
    pub weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    pub eyesight: String,
}

/// A ranked role with the evidence that produced its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role_name: String,
    pub entry_scheme: String,
    pub category: RoleCategory,
    pub match_score: f32,
    pub min_age: f32,
    pub max_age: f32,
    pub education_requirement: String,
    pub physical_standards: PhysicalStandardView,
    pub selection_process: Vec<String>,
    pub priority: u8,
    pub components: Vec<ScoreComponent>,
    pub feature_importance: BTreeMap<ScoreFactor, f32>,
    pub reasoning: String,
}

/// Request payload for generating a study plan from a stored recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    pub recommendation_id: RecommendationId,
    pub target_date: NaiveDate,
    pub hours_per_day: f32,
    /// Overrides the syllabus derived from the top-ranked role.
    #[serde(default)]
    pub exam_code: Option<String>,
}
