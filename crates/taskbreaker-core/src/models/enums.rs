//! Enumerations for subtask priorities, time modes and weekdays.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of subtask priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Wire representation, which is also the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Strict match on the wire labels; `"high"` or `"Urgent"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Invalid priority: {s}"))
    }
}

/// Whether the requested budget is counted in days or in hours.
///
/// The mode also decides the vocabulary of schedule bucket keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Buckets are named `day1`, `day2`, ...
    #[default]
    Days,
    /// Buckets are named `session1`, `session2`, ...
    Hours,
}

impl TimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Days => "days",
            TimeMode::Hours => "hours",
        }
    }

    /// Prefix used for schedule bucket keys.
    pub fn bucket_prefix(&self) -> &'static str {
        match self {
            TimeMode::Days => "day",
            TimeMode::Hours => "session",
        }
    }

    /// Key of the `n`th bucket, counting from 1.
    pub fn bucket_key(&self, n: usize) -> String {
        format!("{}{n}", self.bucket_prefix())
    }
}

impl FromStr for TimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" => Ok(TimeMode::Days),
            "hours" => Ok(TimeMode::Hours),
            _ => Err(format!("Invalid time mode: {s}")),
        }
    }
}

/// Day of the week a user is willing to work on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Monday through Friday.
    pub fn weekdays() -> Vec<Weekday> {
        Weekday::ALL[..5].to_vec()
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid weekday: {s}"))
    }
}
