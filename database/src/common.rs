use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use task_core::{
    error::{Result, TaskError},
    models::{Task, DEFAULT_STATUS},
};

/// Convert SQLite row to Task model
///
/// `description` and `status` are nullable at the column level; rows written
/// by this crate always carry explicit values, but rows inserted by other
/// tooling may not, so NULLs fall back to the documented defaults.
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let description: Option<String> = row.get("description");
    let status: Option<String> = row.get("status");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(Task {
        id: row.get("id"),
        title: row.get("title"),
        description: description.unwrap_or_default(),
        status: status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        created_at,
    })
}

/// Convert SQLx error to TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Absence is handled at the application level, not here
            TaskError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}
