//! Task summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TaskPlan, TimeMode, TotalTime};

/// Summary information about a task plan with progress counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Task plan ID
    pub id: u64,
    /// Task description
    pub task_name: String,
    /// Budget unit
    pub time_mode: TimeMode,
    /// Requested number of days or hours
    pub amount: u32,
    /// Estimated total effort
    pub total_estimated_time: TotalTime,
    /// Number of subtasks
    pub total_subtasks: u32,
    /// Number of subtasks marked done
    pub completed_subtasks: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl TaskSummary {
    /// Completion percentage, rounded down.
    pub fn progress_percent(&self) -> u32 {
        if self.total_subtasks == 0 {
            0
        } else {
            self.completed_subtasks * 100 / self.total_subtasks
        }
    }
}

impl From<&TaskPlan> for TaskSummary {
    fn from(task: &TaskPlan) -> Self {
        Self {
            id: task.id,
            task_name: task.task_name.clone(),
            time_mode: task.time_mode,
            amount: task.amount,
            total_estimated_time: task.plan.total_estimated_time,
            total_subtasks: task.plan.subtasks.len() as u32,
            completed_subtasks: task.plan.completed_count() as u32,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
