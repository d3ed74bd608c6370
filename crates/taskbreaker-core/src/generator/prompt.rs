//! Natural-language request sent to the remote model.

use super::{
    validator::{MAX_SUBTASKS, MIN_SUBTASKS},
    GenerationRequest,
};
use crate::models::Preferences;

/// Builds the prompt describing the task, its constraints and the exact JSON
/// shape expected back.
pub fn build_prompt(request: &GenerationRequest, preferences: &Preferences) -> String {
    let prefix = request.time_mode.bucket_prefix();
    let max_hours = preferences.budget_minutes() / 60;
    let work_days = preferences
        .work_days
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a task planning assistant. Break the task below into concrete subtasks and schedule them.

Task: {task}
Time budget: {amount} {mode}
Maximum working hours per {prefix}: {max_hours}
Work days: {work_days}

Rules:
- Produce between {MIN_SUBTASKS} and {MAX_SUBTASKS} subtasks, in the order they should be done.
- Give each subtask an "id" ("1", "2", ... as strings), a short "name", a "duration" written as a whole number followed by "h" or "m" (for example "2h" or "45m"), a "priority" of "High", "Medium" or "Low", and "done": false.
- Group subtask ids into buckets named "{prefix}1", "{prefix}2", ... in order. A bucket must not exceed {max_hours} hours unless it holds a single longer subtask.
- "totalEstimatedTime" is the sum of all durations rounded to whole hours, written like "9h".
- "notes" is a short summary with practical advice.

Respond with only one JSON object and no other text, shaped like:
{{
  "subtasks": [
    {{"id": "1", "name": "...", "duration": "2h", "priority": "High", "done": false}}
  ],
  "schedule": {{"{prefix}1": ["1"]}},
  "totalEstimatedTime": "2h",
  "notes": "..."
}}"#,
        task = request.task_name,
        amount = request.amount,
        mode = request.time_mode.as_str(),
    )
}
