use anyhow::{Context, Result};
use database::SqliteTaskRepository;
use rest_api::{ApiMetrics, ApiServer};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;

/// Create the task repository based on the complete configuration
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTaskRepository>> {
    let database_path = config.database_path();
    info!("Initializing SQLite repository at: {}", database_path);

    let repo = SqliteTaskRepository::new(&database_path)
        .await
        .context("Failed to create SQLite repository")?;

    repo.init_schema()
        .await
        .context("Failed to initialize database schema")?;

    info!("Task repository created successfully");
    Ok(Arc::new(repo))
}

/// Create the metrics registry shared with the HTTP layer
pub fn create_metrics() -> Result<Arc<ApiMetrics>> {
    let metrics = ApiMetrics::new().context("Failed to register Prometheus metrics")?;

    info!("Metrics registry initialized");
    Ok(Arc::new(metrics))
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<ApiServer<SqliteTaskRepository>> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    let metrics = create_metrics().context("Failed to create metrics registry")?;

    let server = ApiServer::new(repository, metrics);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    ensure_database_directory(&config.database_path())
}

/// Ensure the database directory exists and set secure permissions
pub fn ensure_database_directory(database_path: &str) -> Result<()> {
    // In-memory databases have no backing file
    if database_path.starts_with(":memory:") {
        return Ok(());
    }

    let db_path = Path::new(
        database_path
            .strip_prefix("sqlite://")
            .unwrap_or(database_path),
    );

    // A bare filename like tasks.db has an empty parent and needs nothing
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory: {}", parent.display());
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;

            // Owner-only access on Unix systems
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let permissions = std::fs::Permissions::from_mode(0o700);
                std::fs::set_permissions(parent, permissions)
                    .context("Failed to set directory permissions")?;
            }
        }
    }

    // Restrict the database file itself if it already exists
    if db_path.exists() {
        set_secure_file_permissions(db_path)?;
    }

    Ok(())
}

/// Set secure file permissions (owner-only access on Unix)
fn set_secure_file_permissions(file_path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(file_path, permissions)
            .with_context(|| format!("Failed to set permissions for {}", file_path.display()))?;
        info!(
            "Set secure permissions (0600) for database file: {}",
            file_path.display()
        );
    }

    #[cfg(windows)]
    {
        info!(
            "Database file permissions managed by system on Windows: {}",
            file_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig};
    use tempfile::TempDir;

    fn test_config(database_path: Option<String>) -> Config {
        Config {
            database: DatabaseConfig {
                path: database_path,
                max_connections: 5,
                connection_timeout: 30,
            },
            server: ServerConfig {
                listen_addr: "127.0.0.1".to_string(),
                port: 5000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Compact,
            },
        }
    }

    #[tokio::test]
    async fn test_create_repository_with_file_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("setup_test.db");

        let config = test_config(Some(db_path.display().to_string()));
        let repo = create_repository(&config).await;
        match repo {
            Ok(_) => {}
            Err(e) => panic!("Failed to create repository: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_repository_with_memory_database() {
        let config = test_config(Some(":memory:".to_string()));
        let repo = create_repository(&config).await;
        assert!(repo.is_ok());
    }

    #[test]
    fn test_ensure_database_directory_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("subdir").join("test.db");

        let result = ensure_database_directory(&db_path.display().to_string());
        assert!(result.is_ok());
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_database_directory_with_bare_filename() {
        // No parent directory to create; must not fail
        let result = ensure_database_directory("tasks.db");
        assert!(result.is_ok());
    }

    #[test]
    fn test_ensure_database_directory_with_memory_database() {
        let result = ensure_database_directory(":memory:");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_initialize_app() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("app_test.db");

        let config = test_config(Some(db_path.display().to_string()));
        let server = initialize_app(&config).await;
        assert!(server.is_ok());
    }
}
