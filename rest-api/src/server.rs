//! HTTP server wiring for the task API
//!
//! Builds the axum router over a repository and a metrics registry, and
//! serves it with optional graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::handlers;
use crate::metrics::ApiMetrics;
use crate::request_tracker::track_requests;
use task_core::TaskRepository;

/// Shared state handed to every route handler.
pub struct AppState<R> {
    pub repository: Arc<R>,
    pub metrics: Arc<ApiMetrics>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// HTTP server for the task API.
pub struct ApiServer<R> {
    state: AppState<R>,
}

impl<R: TaskRepository + 'static> ApiServer<R> {
    /// Create a new server over the given repository and metrics registry.
    pub fn new(repository: Arc<R>, metrics: Arc<ApiMetrics>) -> Self {
        Self {
            state: AppState {
                repository,
                metrics,
            },
        }
    }

    /// Create the router with all endpoints and the observability wrapper.
    pub fn create_router(&self) -> Router {
        let metrics = Arc::clone(&self.state.metrics);

        Router::new()
            .route(
                "/tasks",
                get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
            )
            .route(
                "/tasks/:id",
                get(handlers::get_task::<R>)
                    .put(handlers::update_task::<R>)
                    .delete(handlers::delete_task::<R>),
            )
            .route("/health", get(handlers::health))
            .route("/metrics", get(handlers::metrics::<R>))
            .layer(middleware::from_fn_with_state(metrics, track_requests))
            .with_state(self.state.clone())
    }

    /// Start the server and run until the listener fails.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.serve_with_shutdown(addr, std::future::pending()).await
    }

    /// Start the server and drain in-flight requests once `shutdown`
    /// resolves.
    pub async fn serve_with_shutdown<F>(
        self,
        addr: &str,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.create_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting task API server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
