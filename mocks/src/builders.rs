//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Task construction with sensible defaults
//! - NewTask and TaskPatch variants

use chrono::{DateTime, Utc};
use task_core::{NewTask, Task, TaskPatch, DEFAULT_STATUS};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    task: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            task: Task {
                id: 1,
                title: "Test Task".to_string(),
                description: "A test task".to_string(),
                status: DEFAULT_STATUS.to_string(),
                created_at: Utc::now(),
            },
        }
    }

    /// Set task ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.task.id = id;
        self
    }

    /// Set task title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    /// Set task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = description.into();
        self
    }

    /// Set task status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.task.status = status.into();
        self
    }

    /// Set creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.task.created_at = created_at;
        self
    }

    /// Build the final Task
    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for constructing NewTask instances in tests
pub struct NewTaskBuilder {
    new_task: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskBuilder {
    /// Create new builder with a title set
    pub fn new() -> Self {
        Self {
            new_task: NewTask::with_title("New Test Task"),
        }
    }

    /// Create new builder with no fields set
    pub fn empty() -> Self {
        Self {
            new_task: NewTask::default(),
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.new_task.title = Some(title.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.new_task.description = Some(description.into());
        self
    }

    /// Set status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.new_task.status = Some(status.into());
        self
    }

    /// Build the final NewTask
    pub fn build(self) -> NewTask {
        self.new_task
    }
}

/// Builder for constructing TaskPatch instances in tests
pub struct TaskPatchBuilder {
    patch: TaskPatch,
}

impl Default for TaskPatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskPatchBuilder {
    /// Create new builder with no fields set
    pub fn new() -> Self {
        Self {
            patch: TaskPatch::default(),
        }
    }

    /// Set title update
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.patch.title = Some(title.into());
        self
    }

    /// Set description update
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.patch.description = Some(description.into());
        self
    }

    /// Set status update
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.patch.status = Some(status.into());
        self
    }

    /// Build the final TaskPatch
    pub fn build(self) -> TaskPatch {
        self.patch
    }
}
