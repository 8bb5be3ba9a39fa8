use super::super::catalog::RoleDefinition;
use super::super::domain::{CandidateProfile, ScoreComponent, ScoreFactor};

const OLQ_WEIGHT: f32 = 0.4;
const AGE_WEIGHT: f32 = 0.2;
const EDUCATION_WEIGHT: f32 = 0.2;
const PHYSICAL_WEIGHT: f32 = 0.1;
const QUALIFICATION_WEIGHT: f32 = 0.1;

/// The sweet spot sits 30% into the age window; candidates entering early
/// keep more attempts in hand.
const IDEAL_AGE_POSITION: f32 = 0.3;

/// Deterministic rubric producing the weighted component trail and the
/// percentage-scale total.
pub(crate) fn score_role(
    role: &RoleDefinition,
    profile: &CandidateProfile,
) -> (Vec<ScoreComponent>, f32) {
    let (olq_value, olq_notes) = olq_alignment(role, profile);
    let (age_value, age_notes) = age_alignment(role, profile);
    let (education_value, education_notes) = education_alignment(profile);
    let (physical_value, physical_notes) = physical_alignment(profile);
    let (qualification_value, qualification_notes) = qualification_alignment(profile);

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::Olq,
            weight: OLQ_WEIGHT,
            value: olq_value,
            notes: olq_notes,
        },
        ScoreComponent {
            factor: ScoreFactor::Age,
            weight: AGE_WEIGHT,
            value: age_value,
            notes: age_notes,
        },
        ScoreComponent {
            factor: ScoreFactor::Education,
            weight: EDUCATION_WEIGHT,
            value: education_value,
            notes: education_notes,
        },
        ScoreComponent {
            factor: ScoreFactor::Physical,
            weight: PHYSICAL_WEIGHT,
            value: physical_value,
            notes: physical_notes,
        },
        ScoreComponent {
            factor: ScoreFactor::Qualifications,
            weight: QUALIFICATION_WEIGHT,
            value: qualification_value,
            notes: qualification_notes,
        },
    ];

    let total: f32 = components
        .iter()
        .map(|component| component.weight * component.value)
        .sum::<f32>()
        * 100.0;

    (components, total)
}

fn olq_alignment(role: &RoleDefinition, profile: &CandidateProfile) -> (f32, String) {
    let value = if role.min_olq < 100.0 {
        ((profile.olq_score - role.min_olq) / (100.0 - role.min_olq)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (
        value,
        format!(
            "olq {:.1} scaled over minimum {:.0}",
            profile.olq_score, role.min_olq
        ),
    )
}

fn age_alignment(role: &RoleDefinition, profile: &CandidateProfile) -> (f32, String) {
    let span = role.max_age - role.min_age;
    let ideal = role.min_age + span * IDEAL_AGE_POSITION;
    let value = (1.0 - (profile.age_years - ideal).abs() / span).max(0.0);
    (
        value,
        format!(
            "age {:.1} against ideal {:.1} in the {:.1}-{:.1} window",
            profile.age_years, ideal, role.min_age, role.max_age
        ),
    )
}

fn education_alignment(profile: &CandidateProfile) -> (f32, String) {
    let percentage = profile.academic_percentage;
    if percentage >= 75.0 {
        (
            1.0,
            format!("percentage {percentage:.1} in the distinction band"),
        )
    } else if percentage >= 60.0 {
        (
            0.9,
            format!("percentage {percentage:.1} in the first-division band"),
        )
    } else {
        (0.8, format!("percentage {percentage:.1} at base credit"))
    }
}

fn physical_alignment(profile: &CandidateProfile) -> (f32, String) {
    match (profile.height_cm, profile.weight_kg) {
        (Some(height), Some(weight)) => {
            let bmi = weight / (height / 100.0).powi(2);
            if (18.5..=24.9).contains(&bmi) {
                (1.0, format!("bmi {bmi:.1} within the ideal range"))
            } else if (17.0..=27.0).contains(&bmi) {
                (0.9, format!("bmi {bmi:.1} near the ideal range"))
            } else {
                (0.8, format!("bmi {bmi:.1} outside the preferred range"))
            }
        }
        _ => (
            0.8,
            "height or weight not recorded, base credit applied".to_string(),
        ),
    }
}

fn qualification_alignment(profile: &CandidateProfile) -> (f32, String) {
    let mut value: f32 = 0.5;
    if profile.has_ncc {
        value += 0.3;
    }
    if profile.additional_qualifications > 0 {
        value += 0.2;
    }
    let value = value.min(1.0);

    let notes = match (profile.has_ncc, profile.additional_qualifications) {
        (true, 0) => "ncc certificate on record".to_string(),
        (true, count) => format!("ncc certificate and {count} additional qualification(s)"),
        (false, 0) => "no service-adjacent credentials declared".to_string(),
        (false, count) => format!("{count} additional qualification(s) on record"),
    };

    (value, notes)
}
