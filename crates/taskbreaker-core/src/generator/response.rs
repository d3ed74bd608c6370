//! Extraction of a plan from free-form model output.

use serde_json::Value;

use super::{validator, GenerationError};
use crate::models::Plan;

const FENCE: &str = "```";

/// Finds the JSON object in a model reply.
///
/// The first Markdown code fence wins, wherever it starts: its info string
/// (such as `json`) is skipped and the body runs to the next fence, so prose
/// before or after the block is ignored. Without a fence the span from the
/// first `{` to the last `}` is used. Anything else is returned trimmed.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find(FENCE) {
        let after = &trimmed[start + FENCE.len()..];
        let body = match after.find('\n') {
            Some(newline) if !after[..newline].contains('{') => &after[newline + 1..],
            _ => after,
        };
        let body = match body.find(FENCE) {
            Some(end) => &body[..end],
            None => body,
        };
        return body.trim();
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(open), Some(close)) if open < close => &trimmed[open..=close],
        _ => trimmed,
    }
}

/// Parses and validates a model reply.
///
/// The typed plan is decoded from the original text rather than from the
/// intermediate `Value`, which would sort schedule keys.
pub fn parse_plan(text: &str) -> Result<Plan, GenerationError> {
    let json = extract_json(text);
    if json.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let value: Value = serde_json::from_str(json)?;
    validator::check(&value)?;
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_JSON: &str = r#"{
        "subtasks": [
            {"id": "1", "name": "Gather sources", "duration": "90m", "priority": "High", "done": false},
            {"id": "2", "name": "Outline", "duration": "1h", "priority": "Medium", "done": false},
            {"id": "3", "name": "Draft", "duration": "3h", "priority": "High", "done": false}
        ],
        "schedule": {"day2": ["3"], "day1": ["1", "2"]},
        "totalEstimatedTime": "6h",
        "notes": "Start early."
    }"#;

    #[test]
    fn test_extract_json_variants() {
        assert_eq!(extract_json("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(extract_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(extract_json("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
        assert_eq!(extract_json("```{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(extract_json("```json\n{\"a\":1}"), "{\"a\":1}");
        assert_eq!(
            extract_json("Sure, here it is:\n{\"a\": {\"b\": 2}}\nEnjoy!"),
            "{\"a\": {\"b\": 2}}"
        );
        assert_eq!(extract_json("no braces here"), "no braces here");
    }

    #[test]
    fn test_parse_plan_after_lead_in() {
        let reply = format!("Here is your plan:\n```json\n{PLAN_JSON}\n```");
        let plan = parse_plan(&reply).unwrap();
        assert_eq!(plan.subtasks.len(), 3);
        assert_eq!(plan.notes, "Start early.");
    }

    #[test]
    fn test_parse_plan_with_trailing_prose() {
        let reply = format!("```json\n{PLAN_JSON}\n```\nLet me know if you need changes.");
        let plan = parse_plan(&reply).unwrap();
        assert_eq!(plan.total_estimated_time.to_string(), "6h");
    }

    #[test]
    fn test_parse_unfenced_plan_inside_prose() {
        let reply = format!("I split the task like this: {PLAN_JSON} Good luck!");
        let plan = parse_plan(&reply).unwrap();
        let keys: Vec<_> = plan.schedule.buckets().iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["day2", "day1"]);
    }

    #[test]
    fn test_parse_fenced_plan_keeps_bucket_order() {
        let fenced = format!("```json\n{PLAN_JSON}\n```");
        let plan = parse_plan(&fenced).unwrap();
        assert_eq!(plan.subtasks.len(), 3);
        let keys: Vec<_> = plan.schedule.buckets().iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["day2", "day1"]);
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert!(matches!(
            parse_plan("Sure! Here is your plan."),
            Err(GenerationError::Malformed(_))
        ));
        assert!(matches!(parse_plan("   "), Err(GenerationError::EmptyResponse)));
    }

    #[test]
    fn test_parse_rejects_invalid_plan() {
        let bad = PLAN_JSON.replace("\"Medium\"", "\"Urgent\"");
        assert!(matches!(parse_plan(&bad), Err(GenerationError::Invalid(_))));
    }
}
