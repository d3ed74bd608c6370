//! Persisted task plan record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, TimeMode};

/// A generated plan stored for a user, together with the request that
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPlan {
    /// Unique identifier of the stored plan
    pub id: u64,

    /// Owner of the plan
    pub user_id: String,

    /// Task description as entered by the user (trimmed)
    pub task_name: String,

    /// Whether `amount` counts days or hours
    pub time_mode: TimeMode,

    /// Requested number of days or hours
    pub amount: u32,

    /// Subtasks, schedule, total and notes
    #[serde(flatten)]
    pub plan: Plan,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl TaskPlan {
    /// True when every subtask is done.
    pub fn is_complete(&self) -> bool {
        !self.plan.subtasks.is_empty() && self.plan.completed_count() == self.plan.subtasks.len()
    }
}
