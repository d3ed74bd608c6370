//! Tests for the planner module.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use super::*;
use crate::{
    llm::{CompletionClient, CompletionRequest, LlmError},
    models::{Preferences, TimeMode, Weekday},
    params::{GenerateTask, ListTasks, SetPreferences, TaskRef, UpdateSubtask, UserRef},
};

/// Helper function to create a test planner with an offline generator
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn generate(user_id: &str, task_name: &str) -> GenerateTask {
    GenerateTask {
        user_id: user_id.to_string(),
        task_name: task_name.to_string(),
        time_mode: TimeMode::Days,
        amount: 2,
    }
}

fn task_ref(user_id: &str, task_id: u64) -> TaskRef {
    TaskRef {
        user_id: user_id.to_string(),
        task_id,
    }
}

#[tokio::test]
async fn test_generate_task_uses_fallback_offline() {
    let (_temp_dir, planner) = create_test_planner().await;

    let task = planner
        .generate_task(&generate("alice", "  Build site  "))
        .await
        .expect("Failed to generate task");

    assert_eq!(task.task_name, "Build site");
    assert_eq!(task.user_id, "alice");
    assert_eq!(task.plan.subtasks.len(), 5);
    assert_eq!(task.plan.total_estimated_time.to_string(), "9h");
    assert!(task.plan.notes.contains("fallback"));
    assert!(task.plan.is_valid());

    let stored = planner.get_task(&task_ref("alice", task.id)).await.unwrap();
    assert_eq!(stored, task);
}

#[tokio::test]
async fn test_generate_task_rejects_bad_input() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner.generate_task(&generate("alice", "   ")).await.unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    let mut params = generate("alice", "Build site");
    params.amount = 0;
    let err = planner.generate_task(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    let tasks = planner
        .list_tasks(&ListTasks {
            user_id: "alice".to_string(),
        })
        .await
        .unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_generate_task_respects_preferences() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_preferences(&SetPreferences {
            user_id: "bob".to_string(),
            max_hours_per_day: Some(3),
            work_days: None,
        })
        .await
        .unwrap();

    let mut params = generate("bob", "Plan trip");
    params.time_mode = TimeMode::Hours;
    let task = planner.generate_task(&params).await.unwrap();

    let keys: Vec<_> = task
        .plan
        .schedule
        .buckets()
        .iter()
        .map(|b| b.key.as_str())
        .collect();
    assert_eq!(keys, ["session1", "session2", "session3"]);
}

#[tokio::test]
async fn test_list_tasks_newest_first_and_scoped() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner.generate_task(&generate("alice", "First")).await.unwrap();
    let second = planner.generate_task(&generate("alice", "Second")).await.unwrap();
    planner.generate_task(&generate("bob", "Other")).await.unwrap();

    let tasks = planner
        .list_tasks(&ListTasks {
            user_id: "alice".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, second.id);
    assert_eq!(tasks[1].id, first.id);
    assert_eq!(tasks[0].total_subtasks, 5);
    assert_eq!(tasks[0].completed_subtasks, 0);
}

#[tokio::test]
async fn test_ownership_is_enforced() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner.generate_task(&generate("alice", "Secret")).await.unwrap();

    let err = planner.get_task(&task_ref("mallory", task.id)).await.unwrap_err();
    assert!(matches!(err, PlannerError::Forbidden { id } if id == task.id));

    let err = planner
        .update_subtask(&UpdateSubtask {
            user_id: "mallory".to_string(),
            task_id: task.id,
            subtask_id: "1".to_string(),
            done: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::Forbidden { .. }));

    let err = planner.delete_task(&task_ref("mallory", task.id)).await.unwrap_err();
    assert!(matches!(err, PlannerError::Forbidden { .. }));

    // Untouched
    let stored = planner.get_task(&task_ref("alice", task.id)).await.unwrap();
    assert_eq!(stored.plan.completed_count(), 0);
}

#[tokio::test]
async fn test_update_subtask() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner.generate_task(&generate("alice", "Build site")).await.unwrap();

    let mut params = UpdateSubtask {
        user_id: "alice".to_string(),
        task_id: task.id,
        subtask_id: "3".to_string(),
        done: true,
    };
    let updated = planner.update_subtask(&params).await.unwrap();
    assert!(updated.plan.subtask("3").unwrap().done);
    assert_eq!(updated.plan.completed_count(), 1);
    assert!(updated.updated_at >= task.updated_at);
    assert_eq!(updated.plan.schedule, task.plan.schedule);

    params.done = false;
    let reverted = planner.update_subtask(&params).await.unwrap();
    assert_eq!(reverted.plan.completed_count(), 0);

    params.subtask_id = "42".to_string();
    let err = planner.update_subtask(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::SubtaskNotFound { .. }));

    params.task_id = 999;
    let err = planner.update_subtask(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::TaskNotFound { id: 999 }));
}

#[tokio::test]
async fn test_delete_task() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner.generate_task(&generate("alice", "Temporary")).await.unwrap();

    let deleted = planner.delete_task(&task_ref("alice", task.id)).await.unwrap();
    assert_eq!(deleted.id, task.id);

    let err = planner.get_task(&task_ref("alice", task.id)).await.unwrap_err();
    assert!(err.is_not_found());
    let err = planner.delete_task(&task_ref("alice", task.id)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_preferences_roundtrip() {
    let (_temp_dir, planner) = create_test_planner().await;
    let user = UserRef {
        user_id: "carol".to_string(),
    };

    assert_eq!(planner.preferences(&user).await.unwrap(), Preferences::default());

    let updated = planner
        .set_preferences(&SetPreferences {
            user_id: "carol".to_string(),
            max_hours_per_day: Some(4),
            work_days: Some(vec![Weekday::Saturday]),
        })
        .await
        .unwrap();
    assert_eq!(updated.max_hours_per_day, 4);

    let partial = planner
        .set_preferences(&SetPreferences {
            user_id: "carol".to_string(),
            max_hours_per_day: Some(10),
            work_days: None,
        })
        .await
        .unwrap();
    assert_eq!(partial.max_hours_per_day, 10);
    assert_eq!(partial.work_days, vec![Weekday::Saturday]);
    assert_eq!(planner.preferences(&user).await.unwrap(), partial);

    let err = planner
        .set_preferences(&SetPreferences {
            user_id: "carol".to_string(),
            max_hours_per_day: Some(25),
            work_days: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
    assert_eq!(planner.preferences(&user).await.unwrap(), partial);
}

#[tokio::test]
async fn test_handler_results() {
    let (_temp_dir, planner) = create_test_planner().await;

    let created = planner
        .generate_task_result(&generate("alice", "Write essay"))
        .await
        .unwrap();
    let id = created.resource.id;
    assert!(created.to_string().starts_with(&format!("Created task with ID: {id}")));

    let updated = planner
        .update_subtask_result(&UpdateSubtask {
            user_id: "alice".to_string(),
            task_id: id,
            subtask_id: "2".to_string(),
            done: true,
        })
        .await
        .unwrap();
    assert_eq!(updated.changes, ["Marked subtask 2 as done"]);

    let prefs = planner
        .set_preferences_result(&SetPreferences {
            user_id: "alice".to_string(),
            max_hours_per_day: Some(6),
            work_days: Some(vec![Weekday::Friday, Weekday::Monday]),
        })
        .await
        .unwrap();
    assert_eq!(
        prefs.changes,
        ["Set max hours per day to 6", "Set work days to Monday, Friday"]
    );

    let deleted = planner.delete_task_result(&task_ref("alice", id)).await.unwrap();
    assert_eq!(deleted.to_string(), format!("Deleted task 'Write essay' (ID: {id})\n"));
}

struct ScriptedClient(&'static str);

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<String, LlmError> {
        assert!(request.prompt.contains("Refactor parser"));
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn test_generate_task_stores_remote_plan() {
    let temp_dir = TempDir::new().unwrap();
    let reply = r#"```json
{"subtasks": [
  {"id": "1", "name": "Read grammar", "duration": "45m", "priority": "High", "done": false},
  {"id": "2", "name": "Rewrite lexer", "duration": "2h", "priority": "High", "done": false},
  {"id": "3", "name": "Add tests", "duration": "1h", "priority": "Medium", "done": false}
],
 "schedule": {"session1": ["1", "2"], "session2": ["3"]},
 "totalEstimatedTime": "4h",
 "notes": "Keep the old parser around until tests pass."}
```"#;
    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("remote.db")))
        .with_generator(PlanGenerator::new(Arc::new(ScriptedClient(reply))))
        .build()
        .await
        .unwrap();

    let mut params = generate("dave", "Refactor parser");
    params.time_mode = TimeMode::Hours;
    params.amount = 4;
    let task = planner.generate_task(&params).await.unwrap();

    assert_eq!(task.plan.subtasks.len(), 3);
    assert_eq!(task.plan.total_estimated_time.to_string(), "4h");
    assert_eq!(task.plan.schedule.get("session1").unwrap(), ["1", "2"]);

    let stored = planner.get_task(&task_ref("dave", task.id)).await.unwrap();
    assert_eq!(stored.plan, task.plan);
}
