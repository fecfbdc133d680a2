use async_trait::async_trait;
use crate::{
    error::Result,
    models::{NewTask, Task, TaskPatch},
};

/// Repository trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks ordered by creation time, newest first
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - All stored tasks, empty when the store is empty
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Get a task by its numeric ID
    ///
    /// # Arguments
    /// * `id` - The task ID to find
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Create a new task and return its assigned ID
    ///
    /// Omitted `description` and `status` fields are persisted with their
    /// defaults (empty string and `"pending"`). An empty-string title is
    /// accepted; only the absence of the field is rejected.
    ///
    /// # Arguments
    /// * `task` - The new task data to create
    ///
    /// # Returns
    /// * `Ok(i64)` - The ID assigned to the created task
    /// * `Err(TaskError::Validation)` - If the title field is absent
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<i64>;

    /// Partially update an existing task
    ///
    /// Reads the current row first so unsupplied patch fields keep their
    /// stored values, then writes the merged result. Concurrent updates to
    /// the same ID are not serialized; the last write wins.
    ///
    /// # Arguments
    /// * `id` - The task ID to update
    /// * `patch` - The fields to change (only non-None fields are applied)
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task>;

    /// Delete a task permanently
    ///
    /// Absence is detected from the affected-row count of the delete
    /// statement, not from a precedent read.
    ///
    /// # Arguments
    /// * `id` - The task ID to delete
    ///
    /// # Returns
    /// * `Ok(())` - The task was removed
    /// * `Err(TaskError::NotFound)` - If no task with that ID existed
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<()>;
}
