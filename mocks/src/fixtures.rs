//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - Standard tasks with sensible defaults
//! - Bulk task generators with deterministic ordering

use chrono::{Duration, Utc};
use task_core::{NewTask, Task, TaskPatch, DEFAULT_STATUS};

/// Create a basic test task with sensible defaults
pub fn create_test_task() -> Task {
    Task {
        id: 1,
        title: "Test Task".to_string(),
        description: "A standard test task with default values".to_string(),
        status: DEFAULT_STATUS.to_string(),
        created_at: Utc::now(),
    }
}

/// Create task with specific status
pub fn create_test_task_with_status(status: &str) -> Task {
    let mut task = create_test_task();
    task.status = status.to_string();
    task
}

/// Create multiple unique tasks
///
/// Creation timestamps decrease with the index, so task 1 is the most
/// recent and sorts first in a descending listing.
pub fn create_test_tasks(count: usize) -> Vec<Task> {
    let now = Utc::now();
    (1..=count)
        .map(|i| {
            let status = match i % 3 {
                0 => "completed",
                1 => DEFAULT_STATUS,
                _ => "in_progress",
            };

            Task {
                id: i as i64,
                title: format!("Test Task {i}"),
                description: format!("Test task number {i} for bulk testing"),
                status: status.to_string(),
                created_at: now - Duration::seconds(i as i64),
            }
        })
        .collect()
}

/// Create a standard NewTask for testing creation
pub fn create_new_task() -> NewTask {
    NewTask {
        title: Some("New Test Task".to_string()),
        description: Some("A new task for testing creation".to_string()),
        status: None,
    }
}

/// Create NewTask with specific title
pub fn create_new_task_with_title(title: &str) -> NewTask {
    let mut task = create_new_task();
    task.title = Some(title.to_string());
    task
}

/// Create NewTask with no title, which repositories must reject
pub fn create_new_task_without_title() -> NewTask {
    NewTask {
        title: None,
        description: Some("A task missing its required title".to_string()),
        status: None,
    }
}

/// Create a standard TaskPatch for testing updates
pub fn create_task_patch() -> TaskPatch {
    TaskPatch {
        title: Some("Updated Task Title".to_string()),
        description: Some("Updated task description".to_string()),
        status: None,
    }
}

/// Create TaskPatch that only changes the status
pub fn create_status_patch(status: &str) -> TaskPatch {
    TaskPatch {
        title: None,
        description: None,
        status: Some(status.to_string()),
    }
}
