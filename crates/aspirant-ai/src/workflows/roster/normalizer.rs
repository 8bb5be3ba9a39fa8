use crate::workflows::guidance::EducationLevel;

pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps the loose education labels counsellors type into spreadsheets onto
/// the attainment tiers the screening rules understand.
pub(crate) fn education_level(value: &str) -> Option<EducationLevel> {
    let normalized = clean_text(value).to_ascii_lowercase();
    match normalized.as_str() {
        "10th" | "10th pass" | "high school" | "matric" | "matriculation" | "sslc" => {
            Some(EducationLevel::HighSchool)
        }
        "12th" | "12th pass" | "10+2" | "intermediate" | "higher secondary" | "hsc"
        | "senior secondary" | "diploma" => Some(EducationLevel::Intermediate),
        "graduation" | "graduate" | "bachelors" | "bachelor's" | "degree" | "b.e" | "b.tech"
        | "b.e/b.tech" | "b.a" | "b.sc" | "b.com" | "bca" => Some(EducationLevel::Bachelors),
        "masters" | "master's" | "post graduate" | "postgraduate" | "pg" | "m.e" | "m.tech"
        | "m.a" | "m.sc" | "m.com" | "mba" | "mca" => Some(EducationLevel::Masters),
        "doctorate" | "phd" | "ph.d" => Some(EducationLevel::Doctorate),
        _ => None,
    }
}

pub(crate) fn flag(value: &str) -> bool {
    matches!(
        clean_text(value).to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

pub(crate) fn qualifications(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(clean_text)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) fn clean_for_tests(value: &str) -> String {
    clean_text(value)
}
