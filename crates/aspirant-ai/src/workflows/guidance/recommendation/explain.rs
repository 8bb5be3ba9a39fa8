use std::collections::BTreeMap;

use super::super::catalog::RoleDefinition;
use super::super::domain::{CandidateProfile, ScoreFactor};

/// Normalised share each factor contributed to a match, for explainability
/// panels. The shares always sum to one.
pub(crate) fn feature_importance(
    role: &RoleDefinition,
    profile: &CandidateProfile,
) -> BTreeMap<ScoreFactor, f32> {
    let mut importance = BTreeMap::new();

    let olq_share = if profile.olq_score >= role.min_olq + 20.0 {
        0.35
    } else if profile.olq_score >= role.min_olq + 10.0 {
        0.25
    } else {
        0.15
    };
    importance.insert(ScoreFactor::Olq, olq_share);

    let education_share = if profile.academic_percentage >= 75.0 {
        0.25
    } else if profile.academic_percentage >= 60.0 {
        0.20
    } else {
        0.15
    };
    importance.insert(ScoreFactor::Education, education_share);

    let physical_share = if profile.height_cm.is_some() && profile.weight_kg.is_some() {
        0.20
    } else {
        0.10
    };
    importance.insert(ScoreFactor::Physical, physical_share);

    let qualification_share = if profile.has_ncc || profile.additional_qualifications > 0 {
        0.15
    } else {
        0.05
    };
    importance.insert(ScoreFactor::Qualifications, qualification_share);

    // Age absorbs the remainder, floored so it never vanishes entirely.
    let assigned: f32 = importance.values().sum();
    importance.insert(ScoreFactor::Age, (1.0 - assigned).max(0.05));

    let total: f32 = importance.values().sum();
    for share in importance.values_mut() {
        *share /= total;
    }

    importance
}

/// Candidate-facing narrative for one ranked role, built from the
/// deterministic evidence so it stays stable whatever scorer is wired in.
pub(crate) fn narrate_match(
    role: &RoleDefinition,
    profile: &CandidateProfile,
    match_score: f32,
) -> String {
    let mut reasons = Vec::new();

    if profile.olq_score >= role.min_olq + 20.0 {
        reasons.push(format!(
            "Your OLQ score of {:.1}% significantly exceeds the minimum requirement",
            profile.olq_score
        ));
    } else if profile.olq_score >= role.min_olq + 10.0 {
        reasons.push(format!(
            "Your OLQ score of {:.1}% is well above the minimum requirement",
            profile.olq_score
        ));
    } else {
        reasons.push(format!(
            "Your OLQ score of {:.1}% meets the minimum requirement",
            profile.olq_score
        ));
    }

    if profile.academic_percentage >= 75.0 {
        reasons.push("Your excellent academic performance strengthens your candidacy".to_string());
    } else if profile.academic_percentage >= 60.0 {
        reasons.push("Your good academic record supports this application".to_string());
    }

    if profile.has_ncc {
        reasons.push("Your NCC background provides a significant advantage".to_string());
    }

    if match_score >= 80.0 {
        reasons.push("This role is an excellent match for your profile".to_string());
    } else if match_score >= 65.0 {
        reasons.push("This role is a very good fit for your qualifications".to_string());
    } else {
        reasons.push("This role matches your basic eligibility criteria".to_string());
    }

    format!("{}.", reasons.join(". "))
}
