use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unit of syllabus the planner works from: a named module with an ordered
/// topic list and a nominal time cost per topic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyllabusModule {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub hours_per_topic: f32,
    pub priority: u8,
}

/// Module with its share of the available hours and calendar position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleAllocation {
    pub module_name: String,
    pub topics: Vec<String>,
    pub estimated_hours: f32,
    pub priority: u8,
    pub week_number: u32,
}

/// One calendar day of the generated timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub modules: Vec<String>,
    pub hours_allocated: f32,
    pub topics_covered: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneKind {
    #[serde(rename = "module_completion")]
    ModuleCompletion,
    #[serde(rename = "assessment")]
    Assessment,
    #[serde(rename = "final_prep")]
    FinalPreparation,
    #[serde(rename = "exam")]
    ExamDay,
}

/// Checkpoint anchoring the plan to the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub kind: MilestoneKind,
}

/// Complete preparation plan for one candidate and target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub total_days: i64,
    pub hours_per_day: f32,
    pub total_hours: f32,
    pub modules: Vec<ModuleAllocation>,
    pub daily_schedule: Vec<DayPlan>,
    pub milestones: Vec<Milestone>,
}

/// Failures raised while validating a plan request.
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("target date {target} is not after {today}")]
    TargetDateNotInFuture { target: NaiveDate, today: NaiveDate },
    #[error("hours per day {found} outside accepted range {min}-{max}")]
    HoursOutOfRange { found: f32, min: f32, max: f32 },
    #[error("unknown exam code {0}")]
    UnknownExam(String),
}
