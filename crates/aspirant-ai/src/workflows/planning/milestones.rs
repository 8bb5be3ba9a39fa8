use chrono::{Duration, NaiveDate};

use super::domain::{Milestone, MilestoneKind, ModuleAllocation};

/// Mock-test checkpoints only make sense once the runway exceeds four weeks.
const ASSESSMENT_RUNWAY_DAYS: i64 = 28;
const FINAL_PREP_LEAD_DAYS: i64 = 14;

/// Project module completions onto the calendar in proportion to their hour
/// share, then weave in the assessment checkpoints and the exam itself.
pub(crate) fn build_milestones(
    modules: &[ModuleAllocation],
    start: NaiveDate,
    target: NaiveDate,
) -> Vec<Milestone> {
    let total_days = (target - start).num_days();
    let total_hours: f32 = modules.iter().map(|module| module.estimated_hours).sum();

    let mut milestones = Vec::new();
    let mut cumulative_days = 0i64;

    for module in modules {
        let fraction = if total_hours > 0.0 {
            module.estimated_hours / total_hours
        } else {
            0.0
        };
        cumulative_days += (total_days as f32 * fraction) as i64;

        milestones.push(Milestone {
            title: format!("Complete {}", module.module_name),
            date: start + Duration::days(cumulative_days),
            description: format!("Finish all topics in {}", module.module_name),
            kind: MilestoneKind::ModuleCompletion,
        });
    }

    if total_days > ASSESSMENT_RUNWAY_DAYS {
        milestones.push(Milestone {
            title: "First Mock Test".to_string(),
            date: start + Duration::days(total_days / 4),
            description: "Attempt first full-length mock test".to_string(),
            kind: MilestoneKind::Assessment,
        });
        milestones.push(Milestone {
            title: "Mid-Point Assessment".to_string(),
            date: start + Duration::days(total_days / 2),
            description: "Comprehensive revision and multiple mock tests".to_string(),
            kind: MilestoneKind::Assessment,
        });
        milestones.push(Milestone {
            title: "Final Preparation Phase".to_string(),
            date: start + Duration::days(total_days - FINAL_PREP_LEAD_DAYS),
            description: "Intensive revision, daily mock tests, and last-minute tips".to_string(),
            kind: MilestoneKind::FinalPreparation,
        });
    }

    milestones.push(Milestone {
        title: "Exam Day".to_string(),
        date: target,
        description: "Final examination - Stay confident!".to_string(),
        kind: MilestoneKind::ExamDay,
    });

    // Stable sort keeps insertion order for same-day checkpoints, so the
    // exam itself always closes the list.
    milestones.sort_by_key(|milestone| milestone.date);
    milestones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn allocation(name: &str, estimated_hours: f32) -> ModuleAllocation {
        ModuleAllocation {
            module_name: name.to_string(),
            topics: vec!["Topic".to_string()],
            estimated_hours,
            priority: 1,
            week_number: 1,
        }
    }

    #[test]
    fn module_completions_land_proportionally_to_their_hours() {
        let modules = vec![
            allocation("English", 30.0),
            allocation("General Knowledge", 30.0),
            allocation("Mathematics", 60.0),
        ];
        let start = date(2026, 1, 5);
        let target = date(2026, 3, 6);

        let milestones = build_milestones(&modules, start, target);

        let english = milestones
            .iter()
            .find(|milestone| milestone.title == "Complete English")
            .expect("module milestone");
        assert_eq!(english.date, date(2026, 1, 20));
        assert_eq!(english.description, "Finish all topics in English");
        assert_eq!(english.kind, MilestoneKind::ModuleCompletion);

        let mathematics = milestones
            .iter()
            .find(|milestone| milestone.title == "Complete Mathematics")
            .expect("module milestone");
        assert_eq!(mathematics.date, target);
    }

    #[test]
    fn long_runways_gain_assessment_checkpoints() {
        let modules = vec![allocation("General Studies", 120.0)];
        let start = date(2026, 1, 5);
        let target = date(2026, 3, 6);

        let milestones = build_milestones(&modules, start, target);

        let mock = milestones
            .iter()
            .find(|milestone| milestone.title == "First Mock Test")
            .expect("assessment milestone");
        assert_eq!(mock.date, date(2026, 1, 20));
        assert_eq!(mock.kind, MilestoneKind::Assessment);

        let final_prep = milestones
            .iter()
            .find(|milestone| milestone.kind == MilestoneKind::FinalPreparation)
            .expect("final preparation milestone");
        assert_eq!(final_prep.date, date(2026, 2, 20));
    }

    #[test]
    fn short_runways_skip_assessments_entirely() {
        let modules = vec![allocation("General Studies", 40.0)];
        let start = date(2026, 1, 5);
        let target = date(2026, 2, 2);

        let milestones = build_milestones(&modules, start, target);

        assert!(milestones
            .iter()
            .all(|milestone| milestone.kind != MilestoneKind::Assessment));
        assert!(milestones
            .iter()
            .all(|milestone| milestone.kind != MilestoneKind::FinalPreparation));
    }

    #[test]
    fn the_exam_always_closes_the_sorted_list() {
        let modules = vec![allocation("General Studies", 100.0)];
        let start = date(2026, 1, 5);
        let target = date(2026, 3, 6);

        let milestones = build_milestones(&modules, start, target);

        let dates: Vec<NaiveDate> = milestones.iter().map(|milestone| milestone.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        let last = milestones.last().expect("at least the exam day");
        assert_eq!(last.title, "Exam Day");
        assert_eq!(last.kind, MilestoneKind::ExamDay);
        assert_eq!(last.description, "Final examination - Stay confident!");
    }
}
