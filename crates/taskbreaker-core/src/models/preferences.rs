//! Per-user scheduling preferences.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Weekday;

/// Daily hour budget applied when a user has not chosen one.
pub const DEFAULT_MAX_HOURS_PER_DAY: u32 = 8;

/// Scheduling preferences attached to a user.
///
/// Each field falls back to its default independently, so `{}` is a valid
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Upper bound of scheduled hours in one day or session
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: u32,

    /// Days the user works on; informational only
    #[serde(default = "Weekday::weekdays")]
    pub work_days: Vec<Weekday>,
}

fn default_max_hours_per_day() -> u32 {
    DEFAULT_MAX_HOURS_PER_DAY
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_hours_per_day: DEFAULT_MAX_HOURS_PER_DAY,
            work_days: Weekday::weekdays(),
        }
    }
}

impl Preferences {
    /// Daily budget in minutes. A zero budget is treated as unset.
    pub fn budget_minutes(&self) -> u32 {
        let hours = if self.max_hours_per_day == 0 {
            DEFAULT_MAX_HOURS_PER_DAY
        } else {
            self.max_hours_per_day
        };
        hours.saturating_mul(60)
    }
}
