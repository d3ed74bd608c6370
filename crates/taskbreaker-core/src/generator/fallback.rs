//! Deterministic plan used whenever remote generation is unavailable.

use super::packing::pack;
use crate::models::{Duration, Plan, Preferences, Priority, Subtask, TimeMode, TotalTime};

/// Template phases: name pattern, hours, priority. `{task}` is replaced by the
/// task name.
const TEMPLATES: [(&str, u32, Priority); 5] = [
    ("Research and planning for {task}", 2, Priority::High),
    ("Initial setup and configuration for {task}", 1, Priority::High),
    ("Core implementation of {task}", 3, Priority::High),
    ("Testing and validation of {task}", 2, Priority::Medium),
    ("Documentation and final review for {task}", 1, Priority::Medium),
];

/// Builds the five-phase template plan for `task_name` and packs it under the
/// daily budget from `preferences`.
pub fn fallback_plan(task_name: &str, time_mode: TimeMode, preferences: &Preferences) -> Plan {
    let subtasks: Vec<Subtask> = TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, (pattern, hours, priority))| {
            Subtask::new(
                i + 1,
                pattern.replace("{task}", task_name),
                Duration::Hours(*hours),
                *priority,
            )
        })
        .collect();

    let budget = preferences.budget_minutes();
    let schedule = pack(&subtasks, time_mode, budget);
    let total_estimated_time = TotalTime::sum(subtasks.iter().map(|s| &s.duration));

    let notes = format!(
        "This plan was generated in fallback mode because the AI planner was unavailable. \
         It splits \"{task_name}\" into {} standard phases totalling {total_estimated_time}, \
         with at most {} hours per {}. Adjust the schedule to match your actual progress.",
        subtasks.len(),
        budget / 60,
        match time_mode {
            TimeMode::Days => "day",
            TimeMode::Hours => "session",
        },
    );

    Plan {
        subtasks,
        schedule,
        total_estimated_time,
        notes,
    }
}
