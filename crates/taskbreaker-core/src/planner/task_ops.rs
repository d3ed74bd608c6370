//! Task plan operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::TaskSummaries,
    error::{PlannerError, Result},
    generator::GenerationRequest,
    models::{TaskPlan, TaskSummary},
    params::{GenerateTask, ListTasks, TaskRef, UpdateSubtask},
};

/// Fails unless `task` belongs to `user_id`.
fn ensure_owner(task: &TaskPlan, user_id: &str) -> Result<()> {
    if task.user_id == user_id {
        Ok(())
    } else {
        Err(PlannerError::Forbidden { id: task.id })
    }
}

impl Planner {
    /// Generates a plan for the task and stores it for the user.
    ///
    /// The user's saved preferences (or the defaults) steer generation. Plan
    /// generation itself cannot fail; only input validation and storage can.
    pub async fn generate_task(&self, params: &GenerateTask) -> Result<TaskPlan> {
        let task_name = params.validate()?.to_string();

        let user_id = params.user_id.clone();
        let preferences = self
            .with_database(move |db| db.get_preferences(&user_id))
            .await?;

        let request = GenerationRequest {
            task_name: task_name.clone(),
            time_mode: params.time_mode,
            amount: params.amount,
            preferences: Some(preferences),
        };
        let plan = self.generator.generate(&request).await;

        let user_id = params.user_id.clone();
        let time_mode = params.time_mode;
        let amount = params.amount;
        let task = self
            .with_database(move |db| {
                db.create_task_plan(&user_id, &task_name, time_mode, amount, &plan)
            })
            .await?;

        info!("Stored task {} for user '{}'", task.id, task.user_id);
        Ok(task)
    }

    /// Lists the user's tasks, newest first.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<TaskSummaries> {
        let user_id = params.user_id.clone();
        let tasks = self
            .with_database(move |db| db.list_task_plans(&user_id))
            .await?;

        Ok(TaskSummaries(tasks.iter().map(TaskSummary::from).collect()))
    }

    /// Retrieves one task owned by the user.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` - When no task has this ID
    /// * `PlannerError::Forbidden` - When the task belongs to another user
    pub async fn get_task(&self, params: &TaskRef) -> Result<TaskPlan> {
        let TaskRef { user_id, task_id } = params.clone();

        self.with_database(move |db| {
            let task = db
                .get_task_plan(task_id)?
                .ok_or(PlannerError::TaskNotFound { id: task_id })?;
            ensure_owner(&task, &user_id)?;
            Ok(task)
        })
        .await
    }

    /// Marks a subtask done or not done and returns the updated task.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` - When no task has this ID
    /// * `PlannerError::Forbidden` - When the task belongs to another user
    /// * `PlannerError::SubtaskNotFound` - When the plan has no such subtask
    pub async fn update_subtask(&self, params: &UpdateSubtask) -> Result<TaskPlan> {
        let UpdateSubtask {
            user_id,
            task_id,
            subtask_id,
            done,
        } = params.clone();

        self.with_database(move |db| {
            let task = db
                .get_task_plan(task_id)?
                .ok_or(PlannerError::TaskNotFound { id: task_id })?;
            ensure_owner(&task, &user_id)?;
            db.update_subtask(task_id, &subtask_id, done)
        })
        .await
    }

    /// Deletes a task owned by the user and returns the removed record.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` - When no task has this ID
    /// * `PlannerError::Forbidden` - When the task belongs to another user
    pub async fn delete_task(&self, params: &TaskRef) -> Result<TaskPlan> {
        let TaskRef { user_id, task_id } = params.clone();

        let task = self
            .with_database(move |db| {
                let task = db
                    .get_task_plan(task_id)?
                    .ok_or(PlannerError::TaskNotFound { id: task_id })?;
                ensure_owner(&task, &user_id)?;
                db.delete_task_plan(task_id)?;
                Ok(task)
            })
            .await?;

        info!("Deleted task {} for user '{}'", task.id, task.user_id);
        Ok(task)
    }
}
