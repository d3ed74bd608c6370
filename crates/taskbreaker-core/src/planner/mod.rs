//! High-level planner API for generating and managing task plans.
//!
//! [`Planner`] coordinates the [`PlanGenerator`] and the SQLite [`Database`].
//! Database work is blocking and runs on `tokio`'s blocking pool with a fresh
//! connection per operation, so a `Planner` is cheap to share.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display types) │───▶│ (task_ops,      │───▶│   (via db/)     │
//! │                 │    │  user_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every task operation is scoped to a user: a task owned by someone else is
//! reported as [`PlannerError::Forbidden`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use taskbreaker_core::{params::GenerateTask, models::TimeMode, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/taskbreaker.db"))
//!     .build()
//!     .await?;
//!
//! let task = planner
//!     .generate_task(&GenerateTask {
//!         user_id: "local".to_string(),
//!         task_name: "Write quarterly report".to_string(),
//!         time_mode: TimeMode::Days,
//!         amount: 3,
//!     })
//!     .await?;
//! println!("{task}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    generator::PlanGenerator,
};

pub mod builder;
pub mod handlers;
pub mod task_ops;
pub mod user_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for generating and managing task plans.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: PlanGenerator,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, generator: PlanGenerator) -> Self {
        Self { db_path, generator }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    pub fn generator(&self) -> &PlanGenerator {
        &self.generator
    }

    /// Opens the database on the blocking pool and runs `op` against it.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
