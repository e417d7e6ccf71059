//! File logging for the terminal game.
//!
//! Gameplay text owns stdout, so tracing output goes only to a per-session
//! file under the platform cache directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

const LOG_FILE: &str = "client.log";

/// Get the platform-specific log directory for Dungeon
///
/// - macOS: `~/Library/Caches/dungeon/logs`
/// - Linux: `~/.cache/dungeon/logs` (or `$XDG_CACHE_HOME/dungeon/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon\logs`
/// - Fallback: `/tmp/dungeon/logs`
pub fn default_log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"));

    base_dir.join("logs")
}

/// The session name from the config, or one derived from the current time.
pub fn session_id(config: &ClientConfig) -> String {
    config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    })
}

/// Creates `<root>/<session_id>` and returns it.
pub fn prepare_session_dir(root: &Path, session_id: &str) -> Result<PathBuf> {
    let session_log_dir = root.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;
    Ok(session_log_dir)
}

/// Installs the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// The returned guard flushes pending records when dropped; keep it alive
/// for the whole run.
pub fn setup_logging(config: &ClientConfig) -> Result<WorkerGuard> {
    let session_id = session_id(config);
    let root = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let session_log_dir = prepare_session_dir(&root, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_session_id_wins() {
        let config = ClientConfig {
            session_id: Some("night-run".into()),
            ..ClientConfig::default()
        };
        assert_eq!(session_id(&config), "night-run");
        assert!(session_id(&ClientConfig::default()).starts_with("session_"));
    }

    #[test]
    fn session_dir_is_created_under_root() {
        let root = tempfile::tempdir().unwrap();
        let dir = prepare_session_dir(root.path(), "s1").unwrap();
        assert_eq!(dir, root.path().join("s1"));
        assert!(dir.is_dir());
    }
}
