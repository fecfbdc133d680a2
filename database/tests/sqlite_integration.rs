use database::{NewTask, SqliteTaskRepository, TaskError, TaskPatch, TaskRepository};
use std::time::Duration;

async fn create_test_repository() -> SqliteTaskRepository {
    // Use a unique timestamp-based name for each test to avoid conflicts
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let thread_id = std::thread::current().id();
    let db_name = format!(":memory:test_{}_{:?}", timestamp, thread_id);
    let repo = SqliteTaskRepository::new(&db_name).await.unwrap();
    repo.init_schema().await.unwrap();
    repo
}

#[tokio::test]
async fn test_schema_init_is_idempotent() {
    let repo = create_test_repository().await;

    // Running schema creation again must not fail or wipe data
    repo.create(NewTask::with_title("Test Task")).await.unwrap();
    repo.init_schema().await.unwrap();

    let tasks = repo.list_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_full_task_lifecycle() {
    let repo = create_test_repository().await;

    // Create
    let new_task = NewTask {
        title: Some("Lifecycle Test".to_string()),
        description: Some("Complete task lifecycle test".to_string()),
        status: None,
    };
    let id = repo.create(new_task).await.unwrap();
    assert!(id > 0);

    // Read back, defaults applied
    let task = repo.get(id).await.unwrap().unwrap();
    assert_eq!(task.title, "Lifecycle Test");
    assert_eq!(task.description, "Complete task lifecycle test");
    assert_eq!(task.status, "pending");

    // Update status only
    let patch = TaskPatch {
        status: Some("completed".to_string()),
        ..Default::default()
    };
    let updated = repo.update(id, patch).await.unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.title, "Lifecycle Test");

    // Delete, then the id is gone for every operation
    repo.delete(id).await.unwrap();
    assert!(repo.get(id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(id).await.unwrap_err(),
        TaskError::NotFound(_)
    ));
    assert!(matches!(
        repo.update(id, TaskPatch::default()).await.unwrap_err(),
        TaskError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_create_validates_title_presence() {
    let repo = create_test_repository().await;

    let result = repo
        .create(NewTask {
            title: None,
            description: Some("No title here".to_string()),
            status: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), TaskError::Validation(_)));
    assert!(repo.list_all().await.unwrap().is_empty());

    // Empty string is a present value and passes
    let id = repo.create(NewTask::with_title("")).await.unwrap();
    assert_eq!(repo.get(id).await.unwrap().unwrap().title, "");
}

#[tokio::test]
async fn test_partial_update_keeps_unsupplied_fields() {
    let repo = create_test_repository().await;

    let id = repo
        .create(NewTask {
            title: Some("Original Title".to_string()),
            description: Some("Original description".to_string()),
            status: Some("pending".to_string()),
        })
        .await
        .unwrap();

    // Patch two of the three mutable fields
    let patch = TaskPatch {
        title: Some("New Title".to_string()),
        description: None,
        status: Some("completed".to_string()),
    };
    repo.update(id, patch).await.unwrap();

    let task = repo.get(id).await.unwrap().unwrap();
    assert_eq!(task.title, "New Title");
    assert_eq!(task.description, "Original description");
    assert_eq!(task.status, "completed");
}

#[tokio::test]
async fn test_list_all_ordering_and_empty_store() {
    let repo = create_test_repository().await;

    // Empty store yields an empty sequence, not an error
    assert!(repo.list_all().await.unwrap().is_empty());

    for title in ["oldest", "middle", "newest"] {
        repo.create(NewTask::with_title(title)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let tasks = repo.list_all().await.unwrap();
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repo = create_test_repository().await;

    let first = repo.create(NewTask::with_title("first")).await.unwrap();
    repo.delete(first).await.unwrap();

    // AUTOINCREMENT keeps ids strictly increasing across deletes
    let second = repo.create(NewTask::with_title("second")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_created_task_is_immediately_visible() {
    let repo = create_test_repository().await;

    let id = repo.create(NewTask::with_title("Test Task")).await.unwrap();

    let listed = repo.list_all().await.unwrap();
    assert!(listed.iter().any(|t| t.id == id));
    assert!(repo.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_file_backed_database_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.db");
    let url = db_path.to_str().unwrap();

    let id = {
        let repo = SqliteTaskRepository::new(url).await.unwrap();
        repo.init_schema().await.unwrap();
        repo.create(NewTask::with_title("Persistent Task"))
            .await
            .unwrap()
    };

    // A fresh pool over the same file sees the committed row
    let repo = SqliteTaskRepository::new(url).await.unwrap();
    repo.init_schema().await.unwrap();
    let task = repo.get(id).await.unwrap().unwrap();
    assert_eq!(task.title, "Persistent Task");
}
