//! Task API Server Library
//!
//! This library provides the startup wiring for the task API server:
//! configuration management, telemetry initialization, and database and
//! server setup.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use crate::config::Config;
pub use setup::{create_repository, ensure_database_directory, initialize_app};
pub use telemetry::init_telemetry;
