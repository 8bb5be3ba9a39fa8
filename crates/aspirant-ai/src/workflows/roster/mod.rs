//! CSV import for counsellor-prepared candidate rosters.
//!
//! Counsellors batch-assess cohorts offline and hand the results over as a
//! spreadsheet export. This module turns those rows into the same
//! [`CandidateSubmission`] values the HTTP intake accepts, so every candidate
//! passes through the one validation and screening path regardless of origin.

mod normalizer;
mod parser;

use crate::workflows::guidance::CandidateSubmission;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterImportError {
    #[error("failed to read candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster line {line}: {reason}")]
    Row { line: u64, reason: String },
}

/// A parsed roster row, tagged with its source line for error reporting
/// when the batch is pushed through intake.
#[derive(Debug, Clone)]
pub struct RosterCandidate {
    pub line: u64,
    pub submission: CandidateSubmission,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterCandidate>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterCandidate>, RosterImportError> {
        parser::parse_rows(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::guidance::{EducationLevel, Gender};
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str =
        "Name,Date of Birth,Education,Percentage,Height (cm),Weight (kg),NCC,Qualifications,OLQ Score";

    #[test]
    fn complete_row_maps_every_column() {
        let csv = format!(
            "{HEADER}\nRohan Mehta,2004-09-01,Graduation,82.5,175,70,Yes,NCC A Certificate; State athletics,78\n"
        );
        let candidates = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.line, 2);

        let submission = &candidate.submission;
        assert_eq!(submission.personal.full_name, "Rohan Mehta");
        assert_eq!(
            submission.personal.date_of_birth,
            NaiveDate::from_ymd_opt(2004, 9, 1).unwrap()
        );
        assert_eq!(submission.personal.gender, Gender::Other);
        assert_eq!(submission.education.level, EducationLevel::Bachelors);
        assert_eq!(submission.education.academic_percentage, 82.5);
        assert_eq!(submission.physical.height_cm, Some(175.0));
        assert_eq!(submission.physical.weight_kg, Some(70.0));
        assert!(submission.education.has_ncc);
        assert_eq!(
            submission.education.additional_qualifications,
            vec!["NCC A Certificate".to_string(), "State athletics".to_string()]
        );
        assert_eq!(submission.olq_score, Some(78.0));
        assert!(submission.olq_responses.is_empty());
    }

    #[test]
    fn blank_optional_columns_fall_back_to_defaults() {
        let csv = format!("{HEADER}\nKiran Rao,2006-01-15,12th Pass,68,,,,,\n");
        let candidates = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");

        let submission = &candidates[0].submission;
        assert_eq!(submission.education.level, EducationLevel::Intermediate);
        assert_eq!(submission.physical.height_cm, None);
        assert_eq!(submission.physical.weight_kg, None);
        assert!(!submission.education.has_ncc);
        assert!(submission.education.additional_qualifications.is_empty());
        assert_eq!(submission.olq_score, None);
    }

    #[test]
    fn birth_dates_accept_indian_day_first_formats() {
        assert_eq!(
            parser::parse_birth_date_for_tests("01-09-2004"),
            NaiveDate::from_ymd_opt(2004, 9, 1)
        );
        assert_eq!(
            parser::parse_birth_date_for_tests("01/09/2004"),
            NaiveDate::from_ymd_opt(2004, 9, 1)
        );
        assert_eq!(
            parser::parse_birth_date_for_tests("2004-09-01"),
            NaiveDate::from_ymd_opt(2004, 9, 1)
        );
        assert!(parser::parse_birth_date_for_tests("  ").is_none());
        assert!(parser::parse_birth_date_for_tests("31-02-2004").is_none());

        let csv = format!("{HEADER}\nKiran Rao,15-01-2006,12th Pass,68,,,,,\n");
        let candidates = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");
        assert_eq!(
            candidates[0].submission.personal.date_of_birth,
            NaiveDate::from_ymd_opt(2006, 1, 15).unwrap()
        );
    }

    #[test]
    fn unknown_education_reports_the_offending_line() {
        let csv = format!(
            "{HEADER}\nRohan Mehta,2004-09-01,Graduation,82.5,175,70,Yes,,78\nKiran Rao,2006-01-15,Vocational Certificate,68,,,,,60\n"
        );
        let error = RosterImporter::from_reader(Cursor::new(csv)).expect_err("expected row error");

        match error {
            RosterImportError::Row { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Vocational Certificate"));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error =
            RosterImporter::from_path("./does-not-exist.csv").expect_err("expected io error");

        match error {
            RosterImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn education_labels_cover_common_spellings() {
        assert_eq!(
            normalizer::education_level("Matriculation"),
            Some(EducationLevel::HighSchool)
        );
        assert_eq!(
            normalizer::education_level("10+2"),
            Some(EducationLevel::Intermediate)
        );
        assert_eq!(
            normalizer::education_level("Diploma"),
            Some(EducationLevel::Intermediate)
        );
        assert_eq!(
            normalizer::education_level("B.E/B.Tech"),
            Some(EducationLevel::Bachelors)
        );
        assert_eq!(
            normalizer::education_level("Post Graduate"),
            Some(EducationLevel::Masters)
        );
        assert_eq!(
            normalizer::education_level("PhD"),
            Some(EducationLevel::Doctorate)
        );
        assert_eq!(normalizer::education_level("astronaut school"), None);
    }

    #[test]
    fn flags_and_text_tolerate_loose_formatting() {
        assert!(normalizer::flag("Yes"));
        assert!(normalizer::flag("y"));
        assert!(normalizer::flag("TRUE"));
        assert!(normalizer::flag("1"));
        assert!(!normalizer::flag("No"));
        assert!(!normalizer::flag("0"));
        assert!(!normalizer::flag(""));

        assert_eq!(
            normalizer::clean_for_tests("\u{feff}Rohan\u{200b}  Mehta "),
            "Rohan Mehta"
        );
    }
}
