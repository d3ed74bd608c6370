//! Task plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::conversion_error;
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, Schedule, Subtask, TaskPlan, TimeMode, TotalTime},
};

const INSERT_TASK_SQL: &str = "INSERT INTO task_plans (user_id, task_name, time_mode, amount, subtasks, schedule, total_estimated_time, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const TASK_COLUMNS: &str = "id, user_id, task_name, time_mode, amount, subtasks, schedule, total_estimated_time, notes, created_at, updated_at";
const UPDATE_SUBTASKS_SQL: &str =
    "UPDATE task_plans SET subtasks = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_TASK_SQL: &str = "DELETE FROM task_plans WHERE id = ?1";

impl super::Database {
    /// Stores a generated plan for `user_id` and returns the new record.
    pub fn create_task_plan(
        &mut self,
        user_id: &str,
        task_name: &str,
        time_mode: TimeMode,
        amount: u32,
        plan: &Plan,
    ) -> Result<TaskPlan> {
        let subtasks = serde_json::to_string(&plan.subtasks)?;
        let schedule = serde_json::to_string(&plan.schedule)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TASK_SQL,
            params![
                user_id,
                task_name,
                time_mode.as_str(),
                amount,
                subtasks,
                schedule,
                plan.total_estimated_time.to_string(),
                plan.notes,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert task plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskPlan {
            id,
            user_id: user_id.to_string(),
            task_name: task_name.to_string(),
            time_mode,
            amount,
            plan: plan.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a task plan by its ID.
    pub fn get_task_plan(&self, id: u64) -> Result<Option<TaskPlan>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM task_plans WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], task_plan_from_row)
            .optional()
            .db_context("Failed to query task plan")
    }

    /// Lists every task plan owned by `user_id`, newest first.
    pub fn list_task_plans(&self, user_id: &str) -> Result<Vec<TaskPlan>> {
        let sql =
            format!("SELECT {TASK_COLUMNS} FROM task_plans WHERE user_id = ?1 ORDER BY id DESC");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![user_id], task_plan_from_row)
            .db_context("Failed to query task plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read task plan row")?;

        Ok(tasks)
    }

    /// Sets the `done` flag of one subtask and bumps `updated_at`.
    ///
    /// Nothing else in the plan changes; the schedule and total keep their
    /// generated values.
    pub fn update_subtask(&mut self, task_id: u64, subtask_id: &str, done: bool) -> Result<TaskPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {TASK_COLUMNS} FROM task_plans WHERE id = ?1");
        let mut task = tx
            .query_row(&sql, params![task_id as i64], task_plan_from_row)
            .optional()
            .db_context("Failed to query task plan")?
            .ok_or(PlannerError::TaskNotFound { id: task_id })?;

        let subtask = task
            .plan
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| PlannerError::SubtaskNotFound {
                task_id,
                subtask_id: subtask_id.to_string(),
            })?;
        subtask.done = done;

        let now = Timestamp::now();
        tx.execute(
            UPDATE_SUBTASKS_SQL,
            params![
                serde_json::to_string(&task.plan.subtasks)?,
                now.to_string(),
                task_id as i64
            ],
        )
        .db_context("Failed to update subtask")?;

        tx.commit().db_context("Failed to commit transaction")?;

        task.updated_at = now;
        Ok(task)
    }

    /// Deletes a task plan.
    pub fn delete_task_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task plan")?;

        if deleted == 0 {
            return Err(PlannerError::TaskNotFound { id });
        }
        Ok(())
    }
}

fn task_plan_from_row(row: &Row<'_>) -> rusqlite::Result<TaskPlan> {
    let time_mode: String = row.get(3)?;
    let subtasks: String = row.get(5)?;
    let schedule: String = row.get(6)?;
    let total: String = row.get(7)?;

    Ok(TaskPlan {
        id: row.get::<_, i64>(0)? as u64,
        user_id: row.get(1)?,
        task_name: row.get(2)?,
        time_mode: time_mode.parse::<TimeMode>().map_err(|e| {
            conversion_error(
                3,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?,
        amount: row.get(4)?,
        plan: Plan {
            subtasks: serde_json::from_str::<Vec<Subtask>>(&subtasks)
                .map_err(|e| conversion_error(5, e))?,
            schedule: serde_json::from_str::<Schedule>(&schedule)
                .map_err(|e| conversion_error(6, e))?,
            total_estimated_time: total
                .parse::<TotalTime>()
                .map_err(|e| conversion_error(7, e))?,
            notes: row.get(8)?,
        },
        created_at: row
            .get::<_, String>(9)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(9, e))?,
        updated_at: row
            .get::<_, String>(10)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(10, e))?,
    })
}
