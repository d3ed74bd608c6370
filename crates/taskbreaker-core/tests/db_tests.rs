use taskbreaker_core::{
    models::{Preferences, TimeMode, Weekday},
    Database, PlannerError,
};
use tempfile::NamedTempFile;

mod common;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), 1);

    // Reopening an initialized file is fine
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert!(db.list_task_plans("local").unwrap().is_empty());
}

#[test]
fn test_create_and_get_task_plan() {
    let (_temp_file, mut db) = create_test_db();
    let plan = common::sample_plan();

    let created = db
        .create_task_plan("alice", "Design landing page", TimeMode::Days, 2, &plan)
        .expect("Failed to create task plan");
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = db
        .get_task_plan(created.id)
        .expect("Failed to get task plan")
        .expect("Task plan should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.plan.total_estimated_time.to_string(), "4h");
    // Bucket order survives storage
    let keys: Vec<_> = fetched
        .plan
        .schedule
        .buckets()
        .iter()
        .map(|b| b.key.as_str())
        .collect();
    assert_eq!(keys, ["day2", "day1"]);
}

#[test]
fn test_get_missing_task_plan() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_task_plan(12345).unwrap().is_none());
}

#[test]
fn test_list_task_plans_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    let plan = common::sample_plan();

    let first = db.create_task_plan("alice", "First", TimeMode::Days, 1, &plan).unwrap();
    let second = db.create_task_plan("alice", "Second", TimeMode::Hours, 3, &plan).unwrap();
    db.create_task_plan("bob", "Not mine", TimeMode::Days, 1, &plan).unwrap();

    let tasks = db.list_task_plans("alice").unwrap();
    let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, [second.id, first.id]);
    assert_eq!(tasks[0].time_mode, TimeMode::Hours);
    assert!(db.list_task_plans("nobody").unwrap().is_empty());
}

#[test]
fn test_update_subtask() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .create_task_plan("alice", "Design", TimeMode::Days, 2, &common::sample_plan())
        .unwrap();

    let updated = db.update_subtask(created.id, "2", true).unwrap();
    assert!(updated.plan.subtask("2").unwrap().done);
    assert!(!updated.plan.subtask("1").unwrap().done);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    let fetched = db.get_task_plan(created.id).unwrap().unwrap();
    assert_eq!(fetched.plan.completed_count(), 1);
    assert_eq!(fetched.plan.schedule, created.plan.schedule);
    assert_eq!(fetched.plan.total_estimated_time, created.plan.total_estimated_time);
}

#[test]
fn test_update_subtask_errors() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .create_task_plan("alice", "Design", TimeMode::Days, 2, &common::sample_plan())
        .unwrap();

    match db.update_subtask(created.id, "99", true) {
        Err(PlannerError::SubtaskNotFound { task_id, subtask_id }) => {
            assert_eq!(task_id, created.id);
            assert_eq!(subtask_id, "99");
        }
        other => panic!("Expected SubtaskNotFound, got {other:?}"),
    }

    assert!(matches!(
        db.update_subtask(created.id + 1, "1", true),
        Err(PlannerError::TaskNotFound { .. })
    ));
}

#[test]
fn test_delete_task_plan() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .create_task_plan("alice", "Throwaway", TimeMode::Days, 1, &common::sample_plan())
        .unwrap();

    db.delete_task_plan(created.id).expect("Failed to delete");
    assert!(db.get_task_plan(created.id).unwrap().is_none());
    assert!(matches!(
        db.delete_task_plan(created.id),
        Err(PlannerError::TaskNotFound { .. })
    ));
}

#[test]
fn test_preferences_default_and_upsert() {
    let (_temp_file, mut db) = create_test_db();
    assert_eq!(db.get_preferences("alice").unwrap(), Preferences::default());

    let prefs = Preferences {
        max_hours_per_day: 5,
        work_days: vec![Weekday::Tuesday, Weekday::Thursday],
    };
    db.set_preferences("alice", &prefs).unwrap();
    assert_eq!(db.get_preferences("alice").unwrap(), prefs);

    let replaced = Preferences {
        max_hours_per_day: 7,
        ..prefs
    };
    db.set_preferences("alice", &replaced).unwrap();
    assert_eq!(db.get_preferences("alice").unwrap(), replaced);
    assert_eq!(db.get_preferences("bob").unwrap(), Preferences::default());
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().unwrap();
    let created = db
        .create_task_plan("local", "Scratch", TimeMode::Hours, 2, &common::sample_plan())
        .unwrap();
    assert_eq!(db.list_task_plans("local").unwrap()[0].id, created.id);
}
