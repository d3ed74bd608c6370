//! Data models for generated plans and stored task plans.
//!
//! This module contains the core domain models of the taskbreaker planner.
//! Display implementations live in [`crate::display::models`] so that data
//! structures stay separate from presentation.
//!
//! # Wire format
//!
//! [`Plan`] and [`TaskPlan`] serialize with camelCase field names
//! (`totalEstimatedTime`, `maxHoursPerDay`, ...). Durations and totals are
//! compact strings (`"2h"`, `"45m"`, `"9h"`) backed by typed values that do
//! their arithmetic in minutes.
//!
//! # Examples
//!
//! ```rust
//! use taskbreaker_core::models::{Duration, Plan, Priority, Schedule, Subtask, TotalTime};
//!
//! let subtasks = vec![
//!     Subtask::new(1, "Outline", Duration::Hours(1), Priority::High),
//!     Subtask::new(2, "Draft", Duration::Minutes(90), Priority::Medium),
//!     Subtask::new(3, "Polish", Duration::Minutes(30), Priority::Low),
//! ];
//! let mut schedule = Schedule::new();
//! schedule.push("day1", vec!["1".into(), "2".into(), "3".into()]);
//!
//! let plan = Plan {
//!     total_estimated_time: TotalTime::sum(subtasks.iter().map(|s| &s.duration)),
//!     subtasks,
//!     schedule,
//!     notes: "Short writing task".to_string(),
//! };
//! assert_eq!(plan.total_estimated_time.to_string(), "3h");
//! assert!(plan.is_valid());
//! ```

pub mod duration;
pub mod enums;
pub mod plan;
pub mod preferences;
pub mod schedule;
pub mod subtask;
pub mod summary;
pub mod task_plan;


pub use duration::{Duration, ParseDurationError, TotalTime};
pub use enums::{Priority, TimeMode, Weekday};
pub use plan::Plan;
pub use preferences::{Preferences, DEFAULT_MAX_HOURS_PER_DAY};
pub use schedule::{Bucket, Schedule};
pub use subtask::Subtask;
pub use summary::TaskSummary;
pub use task_plan::TaskPlan;
