//! Subtask model definition.

use serde::{Deserialize, Serialize};

use super::{Duration, Priority};

/// One unit of work within a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    /// Identifier unique within its plan ("1", "2", ...)
    pub id: String,

    /// Human-readable description of the work
    pub name: String,

    /// Estimated effort
    pub duration: Duration,

    /// Relative importance
    pub priority: Priority,

    /// Completion flag, always false when a plan is generated
    pub done: bool,
}

impl Subtask {
    /// Creates an open subtask whose id is the decimal form of `position`.
    pub fn new(position: usize, name: impl Into<String>, duration: Duration, priority: Priority) -> Self {
        Self {
            id: position.to_string(),
            name: name.into(),
            duration,
            priority,
            done: false,
        }
    }
}
