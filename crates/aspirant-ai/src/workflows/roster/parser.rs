use super::normalizer;
use super::{RosterCandidate, RosterImportError};
use crate::workflows::guidance::{
    CandidateSubmission, EducationDetails, Gender, PersonalDetails, PhysicalDetails,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterCandidate>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        // Header occupies line 1; the first data row is line 2.
        let line = (index + 2) as u64;
        let row = record?;
        let submission = row.into_submission(line)?;
        candidates.push(RosterCandidate { line, submission });
    }

    Ok(candidates)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Date of Birth")]
    date_of_birth: String,
    #[serde(rename = "Education")]
    education: String,
    #[serde(rename = "Percentage")]
    percentage: f32,
    #[serde(rename = "Height (cm)", default)]
    height_cm: Option<f32>,
    #[serde(rename = "Weight (kg)", default)]
    weight_kg: Option<f32>,
    #[serde(rename = "NCC", default, deserialize_with = "empty_string_as_none")]
    ncc: Option<String>,
    #[serde(
        rename = "Qualifications",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    qualifications: Option<String>,
    #[serde(rename = "OLQ Score", default)]
    olq_score: Option<f32>,
}

impl RosterRow {
    fn into_submission(self, line: u64) -> Result<CandidateSubmission, RosterImportError> {
        let date_of_birth =
            parse_birth_date(&self.date_of_birth).ok_or_else(|| RosterImportError::Row {
                line,
                reason: format!("unrecognised date of birth '{}'", self.date_of_birth),
            })?;
        let level =
            normalizer::education_level(&self.education).ok_or_else(|| RosterImportError::Row {
                line,
                reason: format!("unrecognised education level '{}'", self.education),
            })?;

        Ok(CandidateSubmission {
            personal: PersonalDetails {
                full_name: normalizer::clean_text(&self.name),
                email: String::new(),
                date_of_birth,
                gender: Gender::Other,
                state: String::new(),
                city: String::new(),
            },
            physical: PhysicalDetails {
                height_cm: self.height_cm,
                weight_kg: self.weight_kg,
                eyesight_left: None,
                eyesight_right: None,
                has_medical_conditions: false,
            },
            education: EducationDetails {
                level,
                academic_percentage: self.percentage,
                stream: None,
                graduation_year: None,
                has_ncc: self.ncc.as_deref().map(normalizer::flag).unwrap_or(false),
                additional_qualifications: self
                    .qualifications
                    .as_deref()
                    .map(normalizer::qualifications)
                    .unwrap_or_default(),
            },
            olq_responses: Vec::new(),
            olq_score: self.olq_score,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_birth_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_birth_date(value)
}
