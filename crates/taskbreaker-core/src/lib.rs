//! Core library for the taskbreaker planner.
//!
//! Turns a task description and a time budget into a small plan of subtasks
//! grouped into day or session buckets. Plans come from a remote completion
//! model when one is configured and otherwise from a deterministic template,
//! so generation always succeeds.
//!
//! - [`generator`]: plan generation, the plan validator and bin-packing
//! - [`llm`]: the completion client seam and the Anthropic implementation
//! - [`db`]: SQLite storage for task plans and preferences
//! - [`planner`]: the async facade used by the CLI and MCP server
//! - [`display`]: Markdown formatting wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use taskbreaker_core::{
//!     generator::{GenerationRequest, PlanGenerator},
//!     models::TimeMode,
//! };
//!
//! # async fn example() {
//! let generator = PlanGenerator::offline();
//! let plan = generator
//!     .generate(&GenerationRequest {
//!         task_name: "Build site".to_string(),
//!         time_mode: TimeMode::Days,
//!         amount: 2,
//!         preferences: None,
//!     })
//!     .await;
//!
//! assert_eq!(plan.subtasks.len(), 5);
//! assert_eq!(plan.total_estimated_time.to_string(), "9h");
//! assert!(plan.is_valid());
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod llm;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, TaskSummaries, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use generator::{GenerationRequest, PlanGenerator};
pub use models::{Plan, Preferences, Priority, Subtask, TaskPlan, TaskSummary, TimeMode, Weekday};
pub use params::{GenerateTask, ListTasks, SetPreferences, TaskRef, UpdateSubtask, UserRef};
pub use planner::{Planner, PlannerBuilder};
