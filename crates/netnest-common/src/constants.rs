//! System-wide constants and default paths.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Node scope used when no node identifier is given.
pub const LOCAL_NODE: &str = "localhost";

/// Default base directory for netnest run state on Linux with root access.
pub const SYSTEM_RUN_DIR: &str = "/var/run/netnest";

/// Returns the run directory, preferring `$HOME/.netnest` for non-root
/// or non-Linux environments, falling back to `/var/run/netnest`.
fn resolve_run_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        let user_dir = PathBuf::from(home).join(".netnest");
        if std::fs::create_dir_all(&user_dir).is_ok() {
            return user_dir;
        }
    }
    PathBuf::from(SYSTEM_RUN_DIR)
}

static RUN_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved run directory for this session.
pub fn run_dir() -> &'static PathBuf {
    RUN_DIR.get_or_init(resolve_run_dir)
}

/// Returns the default node state index path.
pub fn default_state_file() -> String {
    run_dir().join("state.json").to_string_lossy().into_owned()
}

/// File extension for captured strace logs.
pub const TRACE_EXTENSION: &str = "strace";

/// File extension for captured stdout/stderr streams.
pub const OUTPUT_EXTENSION: &str = "out";

/// One-shot delay applied when a capture file is not yet present,
/// absorbing the startup race with the writer. A single bounded wait,
/// never a retry loop.
pub const DEFAULT_TRACE_WAIT_MS: u64 = 500;

/// Application name used in CLI output and state files.
pub const APP_NAME: &str = "netnest";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "netnest";
