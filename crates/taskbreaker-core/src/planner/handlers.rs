//! Handler operations that wrap planner results in display types.
//!
//! The CLI and MCP server both print these wrappers, so the two interfaces
//! produce the same Markdown.

use super::Planner;
use crate::{
    display::{CreateResult, DeleteResult, UpdateResult},
    error::Result,
    models::{Preferences, TaskPlan},
    params::{GenerateTask, SetPreferences, TaskRef, UpdateSubtask},
};

impl Planner {
    /// Generates and stores a task, wrapped for display.
    pub async fn generate_task_result(
        &self,
        params: &GenerateTask,
    ) -> Result<CreateResult<TaskPlan>> {
        self.generate_task(params).await.map(CreateResult::new)
    }

    /// Updates a subtask and records the change for display.
    pub async fn update_subtask_result(
        &self,
        params: &UpdateSubtask,
    ) -> Result<UpdateResult<TaskPlan>> {
        let task = self.update_subtask(params).await?;
        let change = format!(
            "Marked subtask {} as {}",
            params.subtask_id,
            if params.done { "done" } else { "not done" }
        );
        Ok(UpdateResult::with_changes(task, vec![change]))
    }

    /// Deletes a task, wrapped for display.
    pub async fn delete_task_result(&self, params: &TaskRef) -> Result<DeleteResult<TaskPlan>> {
        self.delete_task(params).await.map(DeleteResult::new)
    }

    /// Updates preferences and lists the fields that were set.
    pub async fn set_preferences_result(
        &self,
        params: &SetPreferences,
    ) -> Result<UpdateResult<Preferences>> {
        let preferences = self.set_preferences(params).await?;

        let mut changes = Vec::new();
        if let Some(hours) = params.max_hours_per_day {
            changes.push(format!("Set max hours per day to {hours}"));
        }
        if params.work_days.is_some() {
            let days: Vec<_> = preferences.work_days.iter().map(|d| d.as_str()).collect();
            changes.push(format!("Set work days to {}", days.join(", ")));
        }

        Ok(UpdateResult::with_changes(preferences, changes))
    }
}
