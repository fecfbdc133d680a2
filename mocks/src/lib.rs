//! Mock implementations and test utilities for the task API
//!
//! This crate provides testing infrastructure including:
//! - A mock implementation of the TaskRepository trait
//! - Fluent builders for test data construction
//! - Standard fixtures with deterministic ordering
//! - Contract test helpers shared with the storage backend

pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod repository;

pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use repository::MockTaskRepository;
