//! Contract test helpers for validating trait implementations
//!
//! Provides standardized tests that any implementation of the repository
//! trait should pass, ensuring consistent behavior across the real storage
//! backend and the mock.

use crate::{create_new_task, create_new_task_without_title, NewTaskBuilder, TaskPatchBuilder};
use task_core::{TaskError, TaskRepository, DEFAULT_STATUS};

/// Test any TaskRepository implementation with comprehensive contract tests
///
/// This function runs a suite of tests that any TaskRepository implementation
/// should pass to be considered compliant with the expected contract.
pub async fn test_repository_contract<R: TaskRepository>(repo: &R) {
    test_create_contract(repo).await;
    test_get_contract(repo).await;
    test_update_contract(repo).await;
    test_delete_contract(repo).await;
    test_list_contract(repo).await;
}

/// Test task creation contract
pub async fn test_create_contract<R: TaskRepository>(repo: &R) {
    // Test successful creation
    let new_task = create_new_task();
    let id = repo
        .create(new_task.clone())
        .await
        .expect("Create should succeed");
    assert!(id > 0, "Created task should have positive ID");

    let task = repo
        .get(id)
        .await
        .expect("Get should succeed")
        .expect("Created task should exist");
    assert_eq!(
        Some(task.title.as_str()),
        new_task.title.as_deref(),
        "Created task should preserve title"
    );
    assert_eq!(
        Some(task.description.as_str()),
        new_task.description.as_deref(),
        "Created task should preserve description"
    );
    assert_eq!(
        task.status, DEFAULT_STATUS,
        "Task created without status should get the default"
    );

    // Test missing title rejection
    let missing_title_result = repo.create(create_new_task_without_title()).await;
    assert!(
        missing_title_result.is_err(),
        "Should reject creation without a title"
    );
    match missing_title_result.unwrap_err() {
        TaskError::Validation(_) => {} // Expected
        other => panic!("Expected Validation error, got: {other:?}"),
    }

    // Empty-string title is distinct from a missing title and is accepted
    let empty_title = NewTaskBuilder::new().with_title("").build();
    let empty_id = repo
        .create(empty_title)
        .await
        .expect("Empty-string title should be accepted");
    assert!(empty_id > 0);
}

/// Test get operations contract
pub async fn test_get_contract<R: TaskRepository>(repo: &R) {
    // Create a task first
    let new_task = NewTaskBuilder::new().with_title("Get Contract Task").build();
    let id = repo.create(new_task).await.expect("Create should succeed");

    // Test get by ID
    let retrieved = repo
        .get(id)
        .await
        .expect("Get should succeed")
        .expect("Task should exist");
    assert_eq!(retrieved.id, id);
    assert_eq!(retrieved.title, "Get Contract Task");

    // Test get non-existent ID
    let not_found = repo
        .get(99999)
        .await
        .expect("Get should not error for non-existent ID");
    assert!(not_found.is_none(), "Should return None for non-existent ID");
}

/// Test task update contract
pub async fn test_update_contract<R: TaskRepository>(repo: &R) {
    // Create a task first
    let new_task = NewTaskBuilder::new()
        .with_title("Update Contract Task")
        .with_description("Original description")
        .build();
    let id = repo.create(new_task).await.expect("Create should succeed");

    // Test partial update
    let patch = TaskPatchBuilder::new()
        .with_title("Updated Title")
        .with_status("completed")
        .build();
    let updated = repo
        .update(id, patch)
        .await
        .expect("Update should succeed");
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.status, "completed");
    assert_eq!(
        updated.description, "Original description",
        "Unpatched fields should keep their values"
    );
    assert_eq!(updated.id, id, "ID should remain unchanged");

    // Test empty patch is a no-op on an existing task
    let unchanged = repo
        .update(id, TaskPatchBuilder::new().build())
        .await
        .expect("Empty patch should succeed");
    assert_eq!(unchanged.title, "Updated Title");

    // Test update non-existent task
    let update_result = repo.update(99999, TaskPatchBuilder::new().build()).await;
    assert!(
        update_result.is_err(),
        "Should fail to update non-existent task"
    );
    match update_result.unwrap_err() {
        TaskError::NotFound(_) => {} // Expected
        other => panic!("Expected NotFound error, got: {other:?}"),
    }
}

/// Test task deletion contract
pub async fn test_delete_contract<R: TaskRepository>(repo: &R) {
    // Create a task first
    let new_task = NewTaskBuilder::new()
        .with_title("Delete Contract Task")
        .build();
    let id = repo.create(new_task).await.expect("Create should succeed");

    // Test successful deletion
    repo.delete(id).await.expect("Delete should succeed");

    let after_delete = repo
        .get(id)
        .await
        .expect("Get should not error after delete");
    assert!(after_delete.is_none(), "Deleted task should be gone");

    // Test deleting the same task twice
    let second_delete = repo.delete(id).await;
    assert!(second_delete.is_err(), "Second delete should fail");
    match second_delete.unwrap_err() {
        TaskError::NotFound(_) => {} // Expected
        other => panic!("Expected NotFound error, got: {other:?}"),
    }

    // Test deleting a task that never existed
    let never_existed = repo.delete(99999).await;
    assert!(
        never_existed.is_err(),
        "Should fail for non-existent task"
    );
}

/// Test list operations contract
pub async fn test_list_contract<R: TaskRepository>(repo: &R) {
    // Create multiple tasks
    for i in 1..=3 {
        let new_task = NewTaskBuilder::new()
            .with_title(format!("List Contract Task {i}"))
            .build();
        repo.create(new_task).await.expect("Create should succeed");
    }

    let all_tasks = repo.list_all().await.expect("List all should succeed");
    assert!(
        all_tasks.len() >= 3,
        "Should contain at least our created tasks"
    );

    // Newest first
    for pair in all_tasks.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "Tasks should be ordered by creation time descending"
        );
    }
}
