//! Parameter structures for planner operations
//!
//! These structures are shared by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap them: the CLI converts
//! its clap `Args` structs through `into_params`, and the MCP server
//! deserializes them with the `schema` feature enabled for JSON Schema
//! generation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every operation is scoped to a `user_id`. When omitted in JSON input it
//! defaults to [`DEFAULT_USER`]. The field is left out of the generated JSON
//! Schema; interfaces fill it in from their own session.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{Preferences, TimeMode, Weekday},
};

/// User id applied when none is given.
pub const DEFAULT_USER: &str = "local";

/// Accepted range for `maxHoursPerDay`.
pub const MAX_HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=24;

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

/// Parameters for generating and storing a new task plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateTask {
    /// Owner of the new plan
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
    /// Task to break down (required, non-blank)
    pub task_name: String,
    /// Whether `amount` counts days or hours
    #[serde(default)]
    pub time_mode: TimeMode,
    /// Number of days or hours available (at least 1)
    pub amount: u32,
}

impl GenerateTask {
    /// Checks the request and returns the trimmed task name.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the task name is blank
    /// * `PlannerError::InvalidInput` - When `amount` is zero
    pub fn validate(&self) -> Result<&str> {
        let task_name = self.task_name.trim();
        if task_name.is_empty() {
            return Err(PlannerError::invalid_input("task_name").with_reason("must not be empty"));
        }
        if self.amount == 0 {
            return Err(PlannerError::invalid_input("amount").with_reason("must be at least 1"));
        }
        Ok(task_name)
    }
}

/// Parameters for listing a user's task plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
}

impl Default for ListTasks {
    fn default() -> Self {
        Self {
            user_id: default_user(),
        }
    }
}

/// Parameters addressing one stored task plan.
///
/// Used by show and delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRef {
    /// User making the request; must own the task
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
    /// ID of the task plan
    pub task_id: u64,
}

/// Parameters for marking a subtask done or not done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateSubtask {
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
    /// ID of the task plan
    pub task_id: u64,
    /// Subtask id within the plan ("1", "2", ...)
    pub subtask_id: String,
    /// New completion state
    pub done: bool,
}

/// Parameters addressing a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserRef {
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
}

impl Default for UserRef {
    fn default() -> Self {
        Self {
            user_id: default_user(),
        }
    }
}

/// Parameters for changing preferences. Omitted fields keep their value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetPreferences {
    #[serde(default = "default_user")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub user_id: String,
    /// Maximum scheduled hours per day or session (1 to 24)
    #[serde(default)]
    pub max_hours_per_day: Option<u32>,
    /// Days the user works on (non-empty)
    #[serde(default)]
    pub work_days: Option<Vec<Weekday>>,
}

impl SetPreferences {
    /// Applies the requested changes on top of `current`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When `max_hours_per_day` is outside 1..=24
    /// * `PlannerError::InvalidInput` - When `work_days` is empty
    pub fn apply(&self, current: Preferences) -> Result<Preferences> {
        let mut preferences = current;

        if let Some(hours) = self.max_hours_per_day {
            if !MAX_HOURS_RANGE.contains(&hours) {
                return Err(PlannerError::invalid_input("max_hours_per_day")
                    .with_reason(format!("must be between 1 and 24, got {hours}")));
            }
            preferences.max_hours_per_day = hours;
        }

        if let Some(ref days) = self.work_days {
            if days.is_empty() {
                return Err(
                    PlannerError::invalid_input("work_days").with_reason("must not be empty")
                );
            }
            let mut days = days.clone();
            days.sort();
            days.dedup();
            preferences.work_days = days;
        }

        Ok(preferences)
    }
}
