use super::domain::{ModuleAllocation, SyllabusModule};

/// Shrink factor applied when the calendar offers fewer hours than the
/// syllabus asks for. Surplus time never inflates the template.
pub(crate) fn time_scale(total_hours: f32, required_hours: f32) -> f32 {
    if required_hours > 0.0 {
        (total_hours / required_hours).min(1.0)
    } else {
        1.0
    }
}

/// Spread the available hours across the syllabus in template order and pin
/// each module to the week its cumulative workload lands in.
pub(crate) fn allocate(
    modules: &[SyllabusModule],
    total_hours: f32,
    total_days: i64,
) -> Vec<ModuleAllocation> {
    let required: f32 = modules
        .iter()
        .map(|module| module.topics.len() as f32 * module.hours_per_topic)
        .sum();
    let scale = time_scale(total_hours, required);
    let hours_per_day = total_hours / total_days as f32;
    let last_week = (total_days / 7) as u32 + 1;

    let mut cumulative_days = 0.0f32;
    let mut allocations = Vec::with_capacity(modules.len());

    for module in modules {
        let scaled_hours = module.topics.len() as f32 * module.hours_per_topic * scale;
        cumulative_days += scaled_hours / hours_per_day;
        let week_number = ((cumulative_days / 7.0) as u32 + 1).min(last_week);

        allocations.push(ModuleAllocation {
            module_name: module.name.to_string(),
            topics: module.topics.iter().map(|topic| topic.to_string()).collect(),
            estimated_hours: round_tenth(scaled_hours),
            priority: module.priority,
            week_number,
        });
    }

    allocations
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
