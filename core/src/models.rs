use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to tasks created without an explicit status.
pub const DEFAULT_STATUS: &str = "pending";

/// Core task representation in the Task API service.
///
/// A task is the single persisted resource managed by this system. Each task
/// has a unique numeric ID assigned by the store on creation; the creation
/// timestamp is stamped once and later used as the descending sort key when
/// listing.
///
/// # Examples
///
/// ```rust
/// use task_core::models::Task;
/// use chrono::Utc;
///
/// let task = Task {
///     id: 42,
///     title: "Write deployment runbook".to_string(),
///     description: "Cover rollback and on-call escalation".to_string(),
///     status: "pending".to_string(),
///     created_at: Utc::now(),
/// };
///
/// assert_eq!(task.status, "pending");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Auto-increment primary key
    pub id: i64,
    /// Brief task title
    pub title: String,
    /// Detailed task description, empty string when none was given
    pub description: String,
    /// Free-form status text, no enumeration is enforced
    pub status: String,
    /// Creation timestamp, never mutated after insert
    pub created_at: DateTime<Utc>,
}

/// Data transfer object for creating new tasks.
///
/// Every field is optional at the wire level so that deserialization never
/// rejects a syntactically valid JSON object; the absence of `title` is a
/// domain validation failure detected by the repository, not a parse error.
/// Omitted `description` and `status` fall back to their documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NewTask {
    /// Task title, required; requests without it are rejected
    pub title: Option<String>,
    /// Optional description, defaults to the empty string
    pub description: Option<String>,
    /// Optional status, defaults to `"pending"`
    pub status: Option<String>,
}

impl NewTask {
    /// Create a NewTask with only a title, defaults for the rest
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: None,
        }
    }

    /// Description to persist, empty string when the field was omitted
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Status to persist, [`DEFAULT_STATUS`] when the field was omitted
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}

/// Data transfer object for partially updating existing tasks.
///
/// Only fields present in the patch are overwritten; omitted fields keep the
/// values currently stored. An all-empty patch is a valid no-op update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaskPatch {
    /// Optional new title
    pub title: Option<String>,
    /// Optional new description
    pub description: Option<String>,
    /// Optional new status
    pub status: Option<String>,
}

impl TaskPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_missing_fields_deserialize_to_none() {
        let new_task: NewTask = serde_json::from_str(r#"{"title":"Test Task"}"#).unwrap();
        assert_eq!(new_task.title.as_deref(), Some("Test Task"));
        assert!(new_task.description.is_none());
        assert!(new_task.status.is_none());

        let empty: NewTask = serde_json::from_str("{}").unwrap();
        assert!(empty.title.is_none());
    }

    #[test]
    fn test_new_task_defaults() {
        let new_task = NewTask::with_title("Test Task");
        assert_eq!(new_task.description_or_default(), "");
        assert_eq!(new_task.status_or_default(), DEFAULT_STATUS);

        let explicit = NewTask {
            title: Some("Test Task".to_string()),
            description: Some("Details".to_string()),
            status: Some("completed".to_string()),
        };
        assert_eq!(explicit.description_or_default(), "Details");
        assert_eq!(explicit.status_or_default(), "completed");
    }

    #[test]
    fn test_task_serializes_all_five_fields() {
        let task = Task {
            id: 1,
            title: "Test Task".to_string(),
            description: "Test description".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&task).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for field in ["id", "title", "description", "status", "created_at"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());

        let patch = TaskPatch {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
