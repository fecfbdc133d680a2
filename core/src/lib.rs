//! Task Core Library
//!
//! This crate provides the foundational domain models, error taxonomy, and
//! trait interfaces for the task API service. All other crates depend on the
//! types and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Task, NewTask, TaskPatch)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use task_core::models::NewTask;
//!
//! let new_task = NewTask::with_title("Write deployment runbook");
//!
//! assert_eq!(new_task.status_or_default(), "pending");
//! assert_eq!(new_task.description_or_default(), "");
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task, TaskPatch, DEFAULT_STATUS};
pub use repository::TaskRepository;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
