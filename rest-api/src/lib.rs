//! HTTP surface of the task API
//!
//! This crate provides the axum router and route handlers for the task
//! CRUD endpoints, the health and metrics endpoints, the Prometheus
//! metrics registry, and the observability middleware that wraps every
//! request with logging and metric collection.

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod request_tracker;
pub mod server;

pub use error::ApiError;
pub use metrics::ApiMetrics;
pub use server::{ApiServer, AppState};
