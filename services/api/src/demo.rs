use crate::infra::{InMemoryRecommendationRepository, InMemoryStudyPlanRepository};
use aspirant_ai::error::AppError;
use aspirant_ai::workflows::guidance::{
    CandidateSubmission, EducationDetails, EducationLevel, Gender, GuidanceService, OlqResponse,
    PersonalDetails, PhysicalDetails, RecommendationRecord, RecommendationRepository,
    StudyPlanRecord, StudyPlanRepository, StudyPlanRequest,
};
use aspirant_ai::workflows::planning::ExamCatalog;
use aspirant_ai::workflows::roster::RosterImporter;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Target exam date for the study plan (YYYY-MM-DD). Defaults to today + 120 days.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) target_date: Option<NaiveDate>,
    /// Daily study budget in hours (defaults to 4).
    #[arg(long)]
    pub(crate) hours_per_day: Option<f32>,
    /// Counsellor roster CSV to batch-screen after the walkthrough.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Skip the study plan portion of the demo.
    #[arg(long)]
    pub(crate) skip_study_plan: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExamShowArgs {
    /// Exam code as printed by `exam list` (e.g. NDA, CDS, AFCAT)
    pub(crate) exam_code: String,
}

pub(crate) fn run_exam_list() -> Result<(), AppError> {
    let catalog = ExamCatalog::standard();
    println!("Supported entrance exams");
    for entry in catalog.list() {
        println!(
            "- {} | {} | {} | {} | difficulty: {}",
            entry.exam_code,
            entry.exam_name,
            entry.conducting_body,
            entry.exam_frequency,
            entry.difficulty
        );
    }

    Ok(())
}

pub(crate) fn run_exam_show(args: ExamShowArgs) -> Result<(), AppError> {
    let catalog = ExamCatalog::standard();
    let Some(exam) = catalog.find(&args.exam_code) else {
        println!("Unknown exam code '{}'. Known codes:", args.exam_code);
        for entry in catalog.list() {
            println!("- {}", entry.exam_code);
        }
        return Ok(());
    };

    let details = exam.details_view();
    println!("{} ({})", details.exam_name, details.exam_code);
    println!("Conducting body: {}", details.conducting_body);
    println!("Frequency: {}", details.exam_frequency);
    println!(
        "Eligibility: {} | age {}",
        details.education_requirement, details.age_limits
    );

    println!("\nSubjects");
    for subject in &details.subjects {
        println!(
            "- {} | {:.0} study hours | difficulty: {} | {} topics",
            subject.name,
            subject.study_hours,
            subject.difficulty,
            subject.topics.len()
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        target_date,
        hours_per_day,
        roster_csv,
        skip_study_plan,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let target_date = target_date.unwrap_or_else(|| today + chrono::Duration::days(120));
    let hours_per_day = hours_per_day.unwrap_or(4.0);

    println!("Career guidance demo");
    println!("Evaluation date: {today}");

    let recommendations = Arc::new(InMemoryRecommendationRepository::default());
    let plans = Arc::new(InMemoryStudyPlanRepository::default());
    let service = Arc::new(GuidanceService::new(recommendations, plans));

    let submission = demo_candidate_submission(today);
    let record = match service.recommend(submission, today) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    render_recommendation(&record);

    if !skip_study_plan {
        println!("\nStudy plan for the top match");
        let request = StudyPlanRequest {
            recommendation_id: record.recommendation_id.clone(),
            target_date,
            hours_per_day,
            exam_code: None,
        };
        match service.build_study_plan(request, today) {
            Ok(plan) => render_study_plan(&plan),
            Err(err) => println!("  Study plan unavailable: {}", err),
        }
    }

    if let Some(path) = roster_csv {
        run_roster_batch(service.as_ref(), &path, today)?;
    }

    Ok(())
}

fn render_recommendation(record: &RecommendationRecord) {
    println!(
        "\nCandidate: {} (OLQ {:.1}%)",
        record.candidate_name, record.profile.olq_score
    );
    let recommendation = &record.recommendation;
    println!("Guidance: {}", recommendation.explanation);

    if let Some(analysis) = &recommendation.olq_analysis {
        println!(
            "OLQ band: {} - {}",
            analysis.band.label(),
            analysis.description
        );
        println!("Strengths: {}", analysis.strengths.join(", "));
        println!("Focus areas: {}", analysis.weaknesses.join(", "));
    }

    println!("\nRanked roles");
    for role in &recommendation.recommendations {
        println!(
            "- {} ({}) score {:.1}",
            role.role_name, role.entry_scheme, role.match_score
        );
        println!("  {}", role.reasoning);
    }

    match serde_json::to_string_pretty(&record.view()) {
        Ok(json) => println!("\nStored recommendation payload:\n{json}"),
        Err(err) => println!("\nStored recommendation payload unavailable: {err}"),
    }
}

fn render_study_plan(record: &StudyPlanRecord) {
    let plan = &record.plan;
    println!(
        "Plan {} -> {} ({} days, {:.0} hours at {:.1}h/day)",
        record.plan_id.0, record.role_name, plan.total_days, plan.total_hours, plan.hours_per_day
    );

    println!("\nModule allocation");
    for module in &plan.modules {
        println!(
            "- week {} | {} | {:.1} hours | {} topics",
            module.week_number,
            module.module_name,
            module.estimated_hours,
            module.topics.len()
        );
    }

    if let Some(first_day) = plan.daily_schedule.first() {
        println!(
            "\nFirst study day: {} covering {}",
            first_day.date,
            first_day.modules.join(", ")
        );
    }

    println!("\nMilestones");
    for milestone in &plan.milestones {
        println!(
            "- {} | {} | {}",
            milestone.date, milestone.title, milestone.description
        );
    }
}

fn run_roster_batch<R, P>(
    service: &GuidanceService<R, P>,
    path: &Path,
    today: NaiveDate,
) -> Result<(), AppError>
where
    R: RecommendationRepository + 'static,
    P: StudyPlanRepository + 'static,
{
    println!("\nRoster batch screening: {}", path.display());
    let roster = RosterImporter::from_path(path)?;
    let total = roster.len();
    let mut screened = 0;

    for candidate in roster {
        let name = candidate.submission.personal.full_name.clone();
        match service.recommend(candidate.submission, today) {
            Ok(record) => {
                screened += 1;
                match record.top_match() {
                    Some(top) => println!(
                        "- line {} | {} -> {} ({:.1})",
                        candidate.line, record.candidate_name, top.role_name, top.match_score
                    ),
                    None => println!(
                        "- line {} | {} -> no eligible roles",
                        candidate.line, record.candidate_name
                    ),
                }
            }
            Err(err) => println!("- line {} | {} rejected: {}", candidate.line, name, err),
        }
    }

    println!("{screened}/{total} candidates screened successfully");
    Ok(())
}

/// A strong officer-track walkthrough profile. The birth date is pinned
/// relative to the evaluation date so the demo stays valid whenever it runs.
fn demo_candidate_submission(today: NaiveDate) -> CandidateSubmission {
    let responses = (1..=10)
        .map(|question_id| OlqResponse {
            question_id,
            selected_option: if question_id <= 7 { 1 } else { 2 },
        })
        .collect();

    CandidateSubmission {
        personal: PersonalDetails {
            full_name: "Ananya Sharma".to_string(),
            email: "ananya.sharma@example.in".to_string(),
            date_of_birth: today - chrono::Duration::days(23 * 365 + 120),
            gender: Gender::Female,
            state: "Maharashtra".to_string(),
            city: "Pune".to_string(),
        },
        physical: PhysicalDetails {
            height_cm: Some(168.0),
            weight_kg: Some(58.0),
            eyesight_left: Some(6.0),
            eyesight_right: Some(6.0),
            has_medical_conditions: false,
        },
        education: EducationDetails {
            level: EducationLevel::Bachelors,
            academic_percentage: 84.0,
            stream: Some("Science".to_string()),
            graduation_year: Some(2024),
            has_ncc: true,
            additional_qualifications: vec![
                "NCC C Certificate".to_string(),
                "Inter-university debate captain".to_string(),
            ],
        },
        olq_responses: responses,
        olq_score: None,
    }
}
