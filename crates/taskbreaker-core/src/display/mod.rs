//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "Created task ..." headers or the
//! empty-list message. Every formatter produces Markdown, which the CLI
//! renders with termimad and the MCP server returns as text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (TaskPlan, ...) │───▶│ (CreateResult,  │───▶│ (Terminal/MCP)  │
//! │                 │    │  TaskSummaries) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use taskbreaker_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Preferences saved".to_string());
//! assert_eq!(status.to_string(), "Success: Preferences saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::TaskSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
