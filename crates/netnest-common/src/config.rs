//! Global configuration model for the netnest harness.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the netnest harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base directory for per-node capture files and state.
    pub run_dir: PathBuf,
    /// Path to the node state index file.
    pub state_file: PathBuf,
    /// One-shot wait, in milliseconds, applied when a capture file is
    /// absent at first check.
    pub trace_wait_ms: u64,
}

impl HarnessConfig {
    /// Returns the trace wait as a [`Duration`].
    #[must_use]
    pub const fn trace_wait(&self) -> Duration {
        Duration::from_millis(self.trace_wait_ms)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            run_dir: crate::constants::run_dir().clone(),
            state_file: PathBuf::from(crate::constants::default_state_file()),
            trace_wait_ms: crate::constants::DEFAULT_TRACE_WAIT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wait_is_500ms() {
        let config = HarnessConfig::default();
        assert_eq!(config.trace_wait(), Duration::from_millis(500));
    }
}
