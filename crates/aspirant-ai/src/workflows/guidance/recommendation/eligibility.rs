use super::super::catalog::{requirement_ordinal, RoleCatalog, RoleDefinition};
use super::super::domain::CandidateProfile;

/// Screen the whole catalog and keep the roles the candidate can enter.
pub(crate) fn eligible_roles<'a>(
    profile: &CandidateProfile,
    catalog: &'a RoleCatalog,
) -> Vec<&'a RoleDefinition> {
    catalog
        .roles()
        .iter()
        .filter(|role| meets_requirements(profile, role))
        .collect()
}

/// A role is entered only when every published gate passes: the age window,
/// the questionnaire floor, the height floor when both sides declare one, and
/// the education ladder.
pub(crate) fn meets_requirements(profile: &CandidateProfile, role: &RoleDefinition) -> bool {
    if profile.age_years < role.min_age || profile.age_years > role.max_age {
        return false;
    }

    if profile.olq_score < role.min_olq {
        return false;
    }

    if let (Some(height), Some(floor)) = (profile.height_cm, role.physical.height_male_cm) {
        if height < floor {
            return false;
        }
    }

    profile.education.ordinal() >= requirement_ordinal(role.education_requirement)
}
