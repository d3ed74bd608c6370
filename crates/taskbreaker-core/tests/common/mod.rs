#![allow(dead_code)]

use taskbreaker_core::{
    models::{Duration, Plan, Priority, Schedule, Subtask, TotalTime},
    PlanGenerator, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, taskbreaker_core::Planner) {
    create_test_planner_with(PlanGenerator::offline()).await
}

pub async fn create_test_planner_with(
    generator: PlanGenerator,
) -> (TempDir, taskbreaker_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Three-subtask plan spread over two days
pub fn sample_plan() -> Plan {
    let subtasks = vec![
        Subtask::new(1, "Collect requirements", Duration::Hours(2), Priority::High),
        Subtask::new(2, "Sketch layout", Duration::Minutes(90), Priority::Medium),
        Subtask::new(3, "Review with team", Duration::Minutes(30), Priority::Low),
    ];
    let mut schedule = Schedule::new();
    schedule.push("day2", vec!["3".to_string()]);
    schedule.push("day1", vec!["1".to_string(), "2".to_string()]);

    Plan {
        total_estimated_time: TotalTime::sum(subtasks.iter().map(|s| &s.duration)),
        subtasks,
        schedule,
        notes: "Short planning exercise".to_string(),
    }
}
