//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Schedule, Subtask, TotalTime};
use crate::generator::validator;

/// Generation result for one task: subtasks plus their schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Ordered subtasks (3 to 10 in a valid plan)
    pub subtasks: Vec<Subtask>,

    /// Bucket key to subtask ids
    pub schedule: Schedule,

    /// Whole-hour sum of every subtask duration
    pub total_estimated_time: TotalTime,

    /// Free-text summary
    pub notes: String,
}

impl Plan {
    /// Looks up a subtask by id.
    pub fn subtask(&self, id: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == id)
    }

    /// Sum of every subtask duration in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.subtasks
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.duration.as_minutes()))
    }

    /// Number of subtasks marked done.
    pub fn completed_count(&self) -> usize {
        self.subtasks.iter().filter(|s| s.done).count()
    }

    /// Runs the plan validator against the serialized form of this plan.
    pub fn is_valid(&self) -> bool {
        serde_json::to_value(self)
            .map(|value| validator::validate(&value))
            .unwrap_or(false)
    }
}
