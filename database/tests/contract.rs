//! Repository contract tests for the SQLite backend
//!
//! Runs the shared contract suite from the mocks crate against the real
//! storage implementation, so the backend and the test double stay
//! behaviorally aligned.

use database::SqliteTaskRepository;
use mocks::test_repository_contract;

async fn create_test_repository() -> SqliteTaskRepository {
    let database_url = format!(
        ":memory:contract_{}_{:?}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        std::thread::current().id()
    );

    let repo = SqliteTaskRepository::new(&database_url)
        .await
        .expect("Failed to create test repository");
    repo.init_schema().await.expect("Failed to initialize schema");
    repo
}

#[tokio::test]
async fn test_sqlite_repository_satisfies_contract() {
    let repo = create_test_repository().await;
    test_repository_contract(&repo).await;
}
