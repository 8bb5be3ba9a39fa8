mod allocation;
mod domain;
mod exams;
mod milestones;
mod schedule;
mod syllabus;

pub use domain::{
    DayPlan, Milestone, MilestoneKind, ModuleAllocation, PlanningError, StudyPlan, SyllabusModule,
};
pub use exams::{
    ExamCatalog, ExamDefinition, ExamDetailsView, ExamListEntry, ExamSubject, ExamSubjectView,
};
pub use syllabus::SyllabusCatalog;

use chrono::NaiveDate;

const MIN_HOURS_PER_DAY: f32 = 1.0;
const MAX_HOURS_PER_DAY: f32 = 16.0;

/// Greedy planner turning a role or exam syllabus into a day-by-day
/// timetable with calendar milestones.
#[derive(Debug, Clone)]
pub struct StudyPlanner {
    syllabus: SyllabusCatalog,
    exams: ExamCatalog,
}

impl StudyPlanner {
    pub fn standard() -> Self {
        StudyPlanner {
            syllabus: SyllabusCatalog::standard(),
            exams: ExamCatalog::standard(),
        }
    }

    pub fn exams(&self) -> &ExamCatalog {
        &self.exams
    }

    /// Build a plan for a recommended role. An explicit exam code overrides
    /// the keyword-resolved template and must name a configured exam.
    pub fn build(
        &self,
        role_name: &str,
        exam_code: Option<&str>,
        today: NaiveDate,
        target_date: NaiveDate,
        hours_per_day: f32,
    ) -> Result<StudyPlan, PlanningError> {
        let total_days = (target_date - today).num_days();
        if total_days <= 0 {
            return Err(PlanningError::TargetDateNotInFuture {
                target: target_date,
                today,
            });
        }
        if !(MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY).contains(&hours_per_day) {
            return Err(PlanningError::HoursOutOfRange {
                found: hours_per_day,
                min: MIN_HOURS_PER_DAY,
                max: MAX_HOURS_PER_DAY,
            });
        }

        let modules: Vec<SyllabusModule> = match exam_code {
            Some(code) => self
                .exams
                .find(code)
                .ok_or_else(|| PlanningError::UnknownExam(code.to_string()))?
                .study_modules(),
            None => self.syllabus.modules_for_role(role_name).to_vec(),
        };

        let total_hours = total_days as f32 * hours_per_day;
        let allocations = allocation::allocate(&modules, total_hours, total_days);
        let daily_schedule =
            schedule::build_timetable(&allocations, today, target_date, hours_per_day);
        let milestones = milestones::build_milestones(&allocations, today, target_date);

        Ok(StudyPlan {
            total_days,
            hours_per_day,
            total_hours,
            modules: allocations,
            daily_schedule,
            milestones,
        })
    }
}
