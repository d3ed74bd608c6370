//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all planner operations.
///
/// Failures of the remote completion path never surface here; the generator
/// recovers from them with a fallback plan.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task plan not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Subtask id not present in the task plan
    #[error("Subtask '{subtask_id}' not found in task {task_id}")]
    SubtaskNotFound { task_id: u64, subtask_id: String },
    /// Task plan belongs to a different user
    #[error("Task with ID {id} belongs to another user")]
    Forbidden { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error refers to a task or subtask that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlannerError::TaskNotFound { .. } | PlannerError::SubtaskNotFound { .. }
        )
    }

    /// Whether the caller supplied bad or unauthorized input, as opposed to
    /// an internal failure.
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(
                self,
                PlannerError::Forbidden { .. } | PlannerError::InvalidInput { .. }
            )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let err = PlannerError::invalid_input("amount").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'amount': must be positive"
        );
        assert!(err.is_client_error());

        let err = PlannerError::database("Failed to query")
            .with_source(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().starts_with("Database error: Failed to query"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_classification() {
        assert!(PlannerError::TaskNotFound { id: 1 }.is_not_found());
        assert!(PlannerError::SubtaskNotFound {
            task_id: 1,
            subtask_id: "9".to_string()
        }
        .is_not_found());
        let forbidden = PlannerError::Forbidden { id: 3 };
        assert!(!forbidden.is_not_found());
        assert!(forbidden.is_client_error());
    }
}
