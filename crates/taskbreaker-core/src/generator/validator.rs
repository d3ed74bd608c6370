//! Structural and numeric checks applied to a plan before it is accepted.
//!
//! The validator works on raw JSON rather than on [`Plan`](crate::models::Plan)
//! so that type mismatches coming from a remote model (a string `"true"` for
//! `done`, a numeric id) are reported as rejections instead of being coerced.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `subtasks`, `schedule`, `totalEstimatedTime` and `notes` are present and
//!    non-empty
//! 2. between [`MIN_SUBTASKS`] and [`MAX_SUBTASKS`] subtasks
//! 3. every subtask has a string `id`, `name`, `duration` and `priority`, a
//!    well-formed duration, a known priority and a boolean `done`
//! 4. no subtask is already done
//! 5. subtask ids are unique
//! 6. every id listed in the schedule names a subtask
//! 7. the total is written in whole hours and matches the subtask sum
//!
//! The schedule is not required to cover every subtask.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Duration, ParseDurationError, Priority, TotalTime};

/// Smallest number of subtasks in an acceptable plan.
pub const MIN_SUBTASKS: usize = 3;
/// Largest number of subtasks in an acceptable plan.
pub const MAX_SUBTASKS: usize = 10;

/// Reason a plan was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("plan is not a JSON object")]
    NotAnObject,
    #[error("missing or empty field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("expected 3 to 10 subtasks, got {0}")]
    SubtaskCount(usize),
    #[error("subtask #{index} is missing '{field}'")]
    MissingSubtaskField { index: usize, field: &'static str },
    #[error("subtask #{index}: {source}")]
    InvalidDuration {
        index: usize,
        #[source]
        source: ParseDurationError,
    },
    #[error("subtask #{index} has unknown priority '{value}'")]
    InvalidPriority { index: usize, value: String },
    #[error("subtask #{index} field 'done' must be a boolean")]
    DoneNotBoolean { index: usize },
    #[error("subtask #{index} is already marked done")]
    AlreadyDone { index: usize },
    #[error("duplicate subtask id '{0}'")]
    DuplicateId(String),
    #[error("schedule bucket '{bucket}' references unknown subtask '{id}'")]
    UnknownScheduledId { bucket: String, id: String },
    #[error("totalEstimatedTime '{0}' is not written as whole hours")]
    MalformedTotal(String),
    #[error("totalEstimatedTime is {reported} but subtasks add up to {expected}")]
    TotalMismatch {
        reported: TotalTime,
        expected: TotalTime,
    },
}

/// Returns true when `plan` passes every check.
///
/// Pure: calling it repeatedly on the same value gives the same answer.
pub fn validate(plan: &Value) -> bool {
    check(plan).is_ok()
}

/// Runs every check and reports the first failure.
pub fn check(plan: &Value) -> Result<(), ValidationError> {
    let plan = plan.as_object().ok_or(ValidationError::NotAnObject)?;

    for field in ["subtasks", "schedule", "totalEstimatedTime", "notes"] {
        if !plan.get(field).is_some_and(is_truthy) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let subtasks = plan["subtasks"]
        .as_array()
        .ok_or(ValidationError::WrongType {
            field: "subtasks",
            expected: "an array",
        })?;
    let schedule = plan["schedule"]
        .as_object()
        .ok_or(ValidationError::WrongType {
            field: "schedule",
            expected: "an object",
        })?;
    let total = plan["totalEstimatedTime"]
        .as_str()
        .ok_or(ValidationError::WrongType {
            field: "totalEstimatedTime",
            expected: "a string",
        })?;
    if !plan["notes"].is_string() {
        return Err(ValidationError::WrongType {
            field: "notes",
            expected: "a string",
        });
    }

    if !(MIN_SUBTASKS..=MAX_SUBTASKS).contains(&subtasks.len()) {
        return Err(ValidationError::SubtaskCount(subtasks.len()));
    }

    let mut ids = HashSet::with_capacity(subtasks.len());
    let mut minutes = 0u32;
    for (index, subtask) in subtasks.iter().enumerate() {
        let (id, duration) = check_subtask(index, subtask)?;
        if !ids.insert(id) {
            return Err(ValidationError::DuplicateId(id.to_string()));
        }
        minutes = minutes.saturating_add(duration.as_minutes());
    }

    check_schedule(schedule, &ids)?;

    let reported: TotalTime = total
        .parse()
        .map_err(|_| ValidationError::MalformedTotal(total.to_string()))?;
    let expected = TotalTime::from_minutes(minutes);
    if reported != expected {
        return Err(ValidationError::TotalMismatch { reported, expected });
    }

    Ok(())
}

fn check_subtask(index: usize, subtask: &Value) -> Result<(&str, Duration), ValidationError> {
    let subtask = subtask.as_object().ok_or(ValidationError::WrongType {
        field: "subtasks",
        expected: "an array of objects",
    })?;

    let id = required_str(subtask, index, "id")?;
    required_str(subtask, index, "name")?;
    let duration = required_str(subtask, index, "duration")?;
    let priority = required_str(subtask, index, "priority")?;

    let duration = duration
        .parse::<Duration>()
        .map_err(|source| ValidationError::InvalidDuration { index, source })?;

    if priority.parse::<Priority>().is_err() {
        return Err(ValidationError::InvalidPriority {
            index,
            value: priority.to_string(),
        });
    }

    match subtask.get("done") {
        Some(Value::Bool(false)) => {}
        Some(Value::Bool(true)) => return Err(ValidationError::AlreadyDone { index }),
        _ => return Err(ValidationError::DoneNotBoolean { index }),
    }

    Ok((id, duration))
}

fn check_schedule(schedule: &Map<String, Value>, ids: &HashSet<&str>) -> Result<(), ValidationError> {
    for (bucket, entries) in schedule {
        let entries = entries.as_array().ok_or(ValidationError::WrongType {
            field: "schedule",
            expected: "an object of id arrays",
        })?;
        for entry in entries {
            let id = entry.as_str().ok_or(ValidationError::WrongType {
                field: "schedule",
                expected: "an object of string id arrays",
            })?;
            if !ids.contains(id) {
                return Err(ValidationError::UnknownScheduledId {
                    bucket: bucket.clone(),
                    id: id.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn required_str<'a>(
    subtask: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match subtask.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        Some(value) if is_truthy(value) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
        _ => Err(ValidationError::MissingSubtaskField { index, field }),
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
