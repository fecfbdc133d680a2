//! End-to-end test harness for the task API server.
//!
//! Spawns the compiled `task-api-server` binary on an ephemeral port with a
//! throwaway SQLite database, waits for `/health` to come up, and hands tests
//! a reqwest client pointed at the live server. The binary must already be
//! built (`cargo build -p api-server`) or be named via `TASK_API_SERVER_BIN`.

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tempfile::TempDir;
use tokio::process::{Child, Command};
use tracing::info;

/// A running server instance owned by a single test.
///
/// The child process is killed when the harness is dropped; the database
/// lives in a [`TempDir`] that is removed at the same time.
pub struct TestServer {
    process: Option<Child>,
    base_url: String,
    client: reqwest::Client,
    _data_dir: TempDir,
}

impl TestServer {
    /// Spawn a fresh server on an unused port and wait until it answers
    /// health checks.
    pub async fn spawn() -> Result<Self> {
        let binary = server_binary();
        let port = ephemeral_port()?;
        let data_dir = TempDir::new().context("Failed to create temporary database directory")?;
        let db_path = data_dir.path().join("tasks.db");

        info!("🚀 Starting test server on port {} (db: {})", port, db_path.display());

        let process = Command::new(&binary)
            .arg("--listen-addr")
            .arg("127.0.0.1")
            .arg("--port")
            .arg(port.to_string())
            .arg("--database-path")
            .arg(&db_path)
            .arg("--log-format")
            .arg("compact")
            .env("RUST_LOG", "info")
            .kill_on_drop(true)
            .spawn()
            .with_context(|| {
                format!(
                    "Failed to spawn server binary at {} (build it with `cargo build -p api-server`)",
                    binary.display()
                )
            })?;

        let base_url = format!("http://127.0.0.1:{port}");
        let client = reqwest::Client::new();

        let server = Self {
            process: Some(process),
            base_url,
            client,
            _data_dir: data_dir,
        };
        server.wait_until_ready().await?;
        Ok(server)
    }

    /// Absolute URL for a server-relative path such as `/tasks`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The shared HTTP client for this server.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    async fn wait_until_ready(&self) -> Result<()> {
        let health_url = self.url("/health");
        for attempt in 1..=30 {
            tokio::time::sleep(Duration::from_millis(500)).await;
            match self
                .client
                .get(&health_url)
                .timeout(Duration::from_secs(2))
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    info!("✅ Server ready after {} attempts", attempt);
                    return Ok(());
                }
                _ => {
                    if attempt % 5 == 0 {
                        info!("⏳ Server not ready yet, attempt {}/30", attempt);
                    }
                }
            }
        }
        anyhow::bail!("Server failed to become ready within 15 seconds")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            info!("🛑 Stopping test server");
            let _ = process.start_kill();
        }
    }
}

/// Install a logging subscriber for test output. Safe to call from every
/// test; only the first call wins.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

fn server_binary() -> PathBuf {
    if let Ok(path) = std::env::var("TASK_API_SERVER_BIN") {
        return PathBuf::from(path);
    }
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.push("target");
    path.push("debug");
    path.push(format!("task-api-server{}", std::env::consts::EXE_SUFFIX));
    path
}

fn ephemeral_port() -> Result<u16> {
    let listener =
        TcpListener::bind("127.0.0.1:0").context("Failed to reserve an ephemeral port")?;
    let port = listener
        .local_addr()
        .context("Failed to read reserved port")?
        .port();
    drop(listener);
    Ok(port)
}
