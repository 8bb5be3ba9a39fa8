use chrono::{Duration, NaiveDate};

use super::domain::{DayPlan, ModuleAllocation};

const REVISION_MODULE: &str = "Revision & Practice";
const REVISION_TOPICS: [&str; 3] = [
    "Revision of previous week topics",
    "Practice tests",
    "Doubt clearing",
];

struct QueueItem {
    module: String,
    topic: String,
    hours: f32,
}

/// Walk the calendar day by day, draining the flattened topic queue into
/// daily entries. Every seventh day is reserved for consolidation and does
/// not consume the queue; the walk stops once the queue is drained.
pub(crate) fn build_timetable(
    modules: &[ModuleAllocation],
    start: NaiveDate,
    target: NaiveDate,
    hours_per_day: f32,
) -> Vec<DayPlan> {
    let mut queue: Vec<QueueItem> = Vec::new();
    for module in modules {
        if module.topics.is_empty() {
            continue;
        }
        let hours_per_topic = module.estimated_hours / module.topics.len() as f32;
        for topic in &module.topics {
            queue.push(QueueItem {
                module: module.module_name.clone(),
                topic: topic.clone(),
                hours: hours_per_topic,
            });
        }
    }

    let total_days = (target - start).num_days();
    let mut schedule = Vec::new();
    let mut index = 0usize;

    for day in 0..total_days {
        if index >= queue.len() {
            break;
        }
        let date = start + Duration::days(day);

        if (day + 1) % 7 == 0 {
            schedule.push(DayPlan {
                date,
                modules: vec![REVISION_MODULE.to_string()],
                hours_allocated: hours_per_day,
                topics_covered: REVISION_TOPICS.iter().map(|topic| topic.to_string()).collect(),
            });
            continue;
        }

        let mut remaining = hours_per_day;
        let mut modules_covered: Vec<String> = Vec::new();
        let mut topics_covered: Vec<String> = Vec::new();

        while remaining > 0.0 && index < queue.len() {
            let item = &mut queue[index];
            if !modules_covered.contains(&item.module) {
                modules_covered.push(item.module.clone());
            }

            if item.hours <= remaining {
                topics_covered.push(format!("{}: {}", item.module, item.topic));
                remaining -= item.hours;
                index += 1;
            } else {
                // Carry the unfinished remainder into the next study day.
                topics_covered.push(format!("{}: {} (partial)", item.module, item.topic));
                item.hours -= remaining;
                remaining = 0.0;
            }
        }

        schedule.push(DayPlan {
            date,
            modules: modules_covered,
            hours_allocated: hours_per_day - remaining,
            topics_covered,
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn allocation(name: &str, topics: &[&str], estimated_hours: f32) -> ModuleAllocation {
        ModuleAllocation {
            module_name: name.to_string(),
            topics: topics.iter().map(|topic| topic.to_string()).collect(),
            estimated_hours,
            priority: 1,
            week_number: 1,
        }
    }

    #[test]
    fn drains_the_queue_and_stops_early() {
        let modules = vec![allocation(
            "Mathematics",
            &["Algebra", "Geometry", "Trigonometry", "Statistics"],
            8.0,
        )];

        let schedule = build_timetable(&modules, date(2026, 3, 2), date(2026, 3, 12), 4.0);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].date, date(2026, 3, 2));
        assert_eq!(
            schedule[0].topics_covered,
            vec!["Mathematics: Algebra", "Mathematics: Geometry"]
        );
        assert!((schedule[0].hours_allocated - 4.0).abs() < 1e-6);
        assert_eq!(schedule[1].topics_covered.len(), 2);
    }

    #[test]
    fn splits_topics_that_overrun_the_day() {
        let modules = vec![allocation("Physics", &["Optics", "Mechanics"], 6.0)];

        let schedule = build_timetable(&modules, date(2026, 3, 2), date(2026, 3, 9), 4.0);

        assert_eq!(
            schedule[0].topics_covered,
            vec!["Physics: Optics", "Physics: Mechanics (partial)"]
        );
        assert!((schedule[0].hours_allocated - 4.0).abs() < 1e-6);
        // The remaining two hours of Mechanics finish the next morning.
        assert_eq!(schedule[1].topics_covered, vec!["Physics: Mechanics"]);
        assert!((schedule[1].hours_allocated - 2.0).abs() < 1e-6);
    }

    #[test]
    fn every_seventh_day_consolidates_without_consuming_topics() {
        let topics: Vec<String> = (1..=56).map(|n| format!("Topic {n}")).collect();
        let topic_refs: Vec<&str> = topics.iter().map(String::as_str).collect();
        let modules = vec![allocation("General Studies", &topic_refs, 56.0)];

        let schedule = build_timetable(&modules, date(2026, 3, 2), date(2026, 4, 6), 4.0);

        assert_eq!(schedule[6].modules, vec!["Revision & Practice"]);
        assert_eq!(schedule[6].topics_covered.len(), 3);
        assert_eq!(schedule[13].modules, vec!["Revision & Practice"]);

        // 56 one-hour topics at 4 hours a day need fourteen study days, and
        // the two interleaved revision days stretch the walk to sixteen.
        let study_topics: usize = schedule
            .iter()
            .filter(|day| day.modules != vec!["Revision & Practice"])
            .map(|day| day.topics_covered.len())
            .sum();
        assert_eq!(study_topics, 56);
        assert_eq!(schedule.len(), 16);
    }

    #[test]
    fn daily_hours_never_exceed_the_budget() {
        let modules = vec![
            allocation("English", &["Grammar", "Vocabulary", "Comprehension"], 7.5),
            allocation("Reasoning", &["Puzzles", "Series"], 5.0),
        ];

        let schedule = build_timetable(&modules, date(2026, 3, 2), date(2026, 3, 30), 3.0);

        assert!(!schedule.is_empty());
        for day in &schedule {
            assert!(day.hours_allocated <= 3.0 + 1e-6);
        }
    }
}
