//! Duration and total-time values used by subtasks and plans.
//!
//! Both types travel as compact strings (`"2h"`, `"45m"`, `"9h"`). Arithmetic
//! is always done in minutes; the string form only exists at the boundary.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MINUTES_PER_HOUR: u32 = 60;

/// Error returned when a duration or total-time string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{input}': {reason}")]
pub struct ParseDurationError {
    pub input: String,
    pub reason: &'static str,
}

impl ParseDurationError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Estimated effort for a single subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duration {
    /// Whole hours, serialized as `"{n}h"`
    Hours(u32),
    /// Whole minutes, serialized as `"{n}m"`
    Minutes(u32),
}

impl Duration {
    /// Normalized length in minutes.
    pub fn as_minutes(&self) -> u32 {
        match self {
            Duration::Hours(h) => h.saturating_mul(MINUTES_PER_HOUR),
            Duration::Minutes(m) => *m,
        }
    }

    /// The numeric part as written, regardless of unit.
    pub fn magnitude(&self) -> u32 {
        match self {
            Duration::Hours(n) | Duration::Minutes(n) => *n,
        }
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, unit) = if let Some(digits) = s.strip_suffix('h') {
            (digits, 'h')
        } else if let Some(digits) = s.strip_suffix('m') {
            (digits, 'm')
        } else {
            return Err(ParseDurationError::new(s, "expected an 'h' or 'm' suffix"));
        };

        let value = parse_magnitude(s, digits)?;
        if value == 0 {
            return Err(ParseDurationError::new(s, "duration must be positive"));
        }

        Ok(match unit {
            'h' => Duration::Hours(value),
            _ => Duration::Minutes(value),
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Hours(h) => write!(f, "{h}h"),
            Duration::Minutes(m) => write!(f, "{m}m"),
        }
    }
}

/// Whole-hour total of a plan, serialized as `"{n}h"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TotalTime(pub u32);

impl TotalTime {
    /// Round a minute sum to the nearest hour; half an hour rounds up.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes.saturating_add(MINUTES_PER_HOUR / 2) / MINUTES_PER_HOUR)
    }

    /// Sum a sequence of durations.
    pub fn sum<'a, I>(durations: I) -> Self
    where
        I: IntoIterator<Item = &'a Duration>,
    {
        let minutes = durations
            .into_iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.as_minutes()));
        Self::from_minutes(minutes)
    }

    pub fn hours(&self) -> u32 {
        self.0
    }
}

impl FromStr for TotalTime {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_suffix('h')
            .ok_or_else(|| ParseDurationError::new(s, "expected an 'h' suffix"))?;
        parse_magnitude(s, digits).map(TotalTime)
    }
}

impl fmt::Display for TotalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

fn parse_magnitude(input: &str, digits: &str) -> Result<u32, ParseDurationError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDurationError::new(input, "expected ASCII digits before the unit"));
    }
    digits
        .parse()
        .map_err(|_| ParseDurationError::new(input, "value is too large"))
}

macro_rules! string_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(|e| {
                    de::Error::custom(format!("expected {}: {}", $expecting, e))
                })
            }
        }
    };
}

string_serde!(Duration, "a duration like \"2h\" or \"45m\"");
string_serde!(TotalTime, "a total like \"9h\"");
