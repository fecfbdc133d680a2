//! Database crate for the Task API service
//!
//! This crate provides the SQLite implementation of the TaskRepository trait,
//! offering task persistence with connection pooling and parameterized
//! statements throughout.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for file-backed databases
//! - Inline schema creation at startup
//! - Connection pooling shared across request handlers
//! - Single-point mapping of sqlx errors into the domain error type
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTaskRepository;
//! use task_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTaskRepository::new(":memory:").await?;
//!
//!     // Bring up the schema
//!     repo.init_schema().await?;
//!
//!     // Repository is ready to use
//!     let tasks = repo.list_all().await?;
//!     assert!(tasks.is_empty());
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from task-core for convenience
pub use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, TaskPatch},
    repository::TaskRepository,
};
