//! Route handlers for the task API
//!
//! Thin layer between the router and the repository: handlers validate
//! nothing themselves beyond body extraction, delegate to the repository,
//! and map domain outcomes onto the wire contract.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use task_core::{NewTask, Task, TaskError, TaskPatch, TaskRepository};

use crate::error::ApiError;
use crate::server::AppState;

/// Success message returned by POST /tasks.
pub const TASK_CREATED: &str = "Task created successfully";

/// Success message returned by PUT /tasks/{id}.
pub const TASK_UPDATED: &str = "Task updated successfully";

/// Success message returned by DELETE /tasks/{id}.
pub const TASK_DELETED: &str = "Task deleted successfully";

/// Body returned by POST /tasks on success.
#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Body returned by PUT and DELETE on success.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned by GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /tasks
pub async fn list_tasks<R: TaskRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repository.list_all().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    match state.repository.get(id).await? {
        Some(task) => Ok(Json(task)),
        None => Err(TaskError::not_found_id(id).into()),
    }
}

/// POST /tasks
///
/// A missing or malformed JSON body is treated as a body without `title`,
/// which the repository rejects as a validation error.
pub async fn create_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskCreatedResponse>), ApiError> {
    let new_task = match payload {
        Ok(Json(new_task)) => new_task,
        Err(_) => NewTask::default(),
    };

    let id = state.repository.create(new_task).await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            id,
            message: TASK_CREATED.to_string(),
        }),
    ))
}

/// PUT /tasks/{id}
///
/// A missing or malformed JSON body is treated as an empty patch, so the
/// update becomes a no-op on an existing task and a 404 otherwise.
pub async fn update_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(_) => TaskPatch::default(),
    };

    state.repository.update(id, patch).await?;

    Ok(Json(MessageResponse {
        message: TASK_UPDATED.to_string(),
    }))
}

/// DELETE /tasks/{id}
pub async fn delete_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repository.delete(id).await?;

    Ok(Json(MessageResponse {
        message: TASK_DELETED.to_string(),
    }))
}

/// GET /health
///
/// Shallow liveness probe: reports the process is up without touching
/// storage.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /metrics
pub async fn metrics<R: TaskRepository>(
    State(state): State<AppState<R>>,
) -> Result<impl IntoResponse, ApiError> {
    let (body, content_type) = state
        .metrics
        .render()
        .map_err(|e| ApiError::Internal(format!("Metrics encoding failed: {e}")))?;

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }

    Ok((headers, body))
}
