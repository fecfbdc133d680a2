use crate::common::{row_to_task, sqlx_error_to_task_error};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, TaskPatch},
    repository::TaskRepository,
};

/// SQL that brings up the task table on a fresh database.
const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQLite implementation of the TaskRepository trait
///
/// Persists tasks through a pooled SQLite connection with parameterized
/// statements throughout. One instance is shared across all request handlers.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteTaskRepository)` - Successfully connected repository
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTaskRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteTaskRepository::new("sqlite:///tmp/tasks.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        // Handle different database URL formats
        let db_url = if database_url.starts_with(":memory:") {
            database_url.to_string()
        } else if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(TaskError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let connect_options = if db_url.contains(":memory:") {
            // In-memory databases need no durability tuning
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
        };

        let pool = SqlitePool::connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(Self { pool })
    }

    /// Create the task table if it does not exist yet
    ///
    /// Must be called once after constructing the repository and before
    /// serving requests; a failure here is fatal for startup.
    ///
    /// # Returns
    /// * `Ok(())` - Schema is in place
    /// * `Err(TaskError::Database)` - If schema creation fails
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TASKS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list_all(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, title, description, status, created_at FROM tasks ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row_to_task(&row)?);
        }

        Ok(tasks)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        let result = sqlx::query(
            "SELECT id, title, description, status, created_at FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, task: NewTask) -> Result<i64> {
        // Absence of the title field is the only creation-time validation;
        // an empty string passes
        let title = match task.title.as_deref() {
            Some(title) => title,
            None => return Err(TaskError::missing_field("title")),
        };

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (title, description, status, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(task.description_or_default())
        .bind(task.status_or_default())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        Ok(id)
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        // Read-modify-write: resolve unsupplied fields from the current row.
        // Concurrent updates to the same id are last-write-wins.
        let current = match self.get(id).await? {
            Some(task) => task,
            None => return Err(TaskError::not_found_id(id)),
        };

        let title = patch.title.unwrap_or(current.title);
        let description = patch.description.unwrap_or(current.description);
        let status = patch.status.unwrap_or(current.status);

        let row = sqlx::query(
            r#"
            UPDATE tasks SET title = ?, description = ?, status = ?
            WHERE id = ?
            RETURNING id, title, description, status, created_at
            "#,
        )
        .bind(&title)
        .bind(&description)
        .bind(&status)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        row_to_task(&row)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        // Zero affected rows means the id never existed or was already gone
        if result.rows_affected() == 0 {
            return Err(TaskError::not_found_id(id));
        }

        Ok(())
    }
}
