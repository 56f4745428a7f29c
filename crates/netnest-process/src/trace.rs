//! Strace capture retrieval.

use std::time::Duration;

use netnest_common::constants::DEFAULT_TRACE_WAIT_MS;
use netnest_common::error::Result;
use netnest_common::types::{NodeId, ProcessTag};
use netnest_node::NodeRegistry;

use crate::capture::{Capture, read_capture};

/// Retrieves the strace log captured for a previously started process.
///
/// The call is synchronous, read-only, and idempotent against an
/// unchanged file. The only coordination with the writer is the one-shot
/// wait inherited from the capture read path; whether the default 500 ms
/// is enough in a given deployment is the caller's call, so the wait is
/// configurable via [`TraceReader::with_wait`].
#[derive(Debug)]
pub struct TraceReader<'a> {
    registry: &'a NodeRegistry,
    wait: Duration,
}

impl<'a> TraceReader<'a> {
    /// Creates a reader with the default startup-race wait.
    #[must_use]
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self::with_wait(registry, Duration::from_millis(DEFAULT_TRACE_WAIT_MS))
    }

    /// Creates a reader with a custom startup-race wait.
    #[must_use]
    pub const fn with_wait(registry: &'a NodeRegistry, wait: Duration) -> Self {
        Self { registry, wait }
    }

    /// Reads the strace capture for `tag` on `node`.
    ///
    /// A `None` node resolves to the `localhost` scope. The tag is
    /// validated before any filesystem access.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty tag, an I/O error if
    /// the capture file is missing after the one-shot wait or cannot be
    /// read, and an internal error if the capture is not valid text.
    pub fn read(&self, tag: &str, node: Option<&NodeId>) -> Result<Capture> {
        let tag = ProcessTag::new(tag).inspect_err(|e| {
            tracing::error!(component = "trace-reader", error = %e, "precondition failed");
        })?;

        let path = self.registry.trace_file(&tag, node);
        tracing::debug!(
            component = "trace-reader",
            tag = %tag,
            node = node.map_or(netnest_common::constants::LOCAL_NODE, NodeId::as_str),
            path = %path.display(),
            "reading strace capture"
        );

        match read_capture(&path, self.wait) {
            Ok(contents) => Ok(Capture { path, contents }),
            Err(e) => {
                tracing::error!(
                    component = "trace-reader",
                    tag = %tag,
                    path = %path.display(),
                    error = %e,
                    "failed to read strace capture"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use netnest_common::error::NetnestError;

    use super::*;

    #[test]
    fn reads_prepopulated_capture_for_node_and_tag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = NodeRegistry::new(dir.path());
        let node = NodeId::new("ThreadNode");

        let node_dir = dir.path().join("ThreadNode");
        std::fs::create_dir_all(&node_dir).expect("mkdir");
        std::fs::write(node_dir.join("ContinuousPing.strace"), "execve(...)\n...")
            .expect("write");

        let reader = TraceReader::with_wait(&registry, Duration::ZERO);
        let capture = reader.read("ContinuousPing", Some(&node)).expect("read");
        assert_eq!(capture.contents, "execve(...)\n...");
        assert!(capture.path.ends_with("ThreadNode/ContinuousPing.strace"));
    }

    #[test]
    fn empty_tag_fails_before_any_filesystem_access() {
        let registry = NodeRegistry::new("/nonexistent/netnest");
        let reader = TraceReader::with_wait(&registry, Duration::from_secs(30));

        let start = std::time::Instant::now();
        let err = reader.read("", None).expect_err("empty tag");
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(matches!(err, NetnestError::Config { .. }));
    }

    #[test]
    fn absent_capture_fails_with_io_error_naming_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = NodeRegistry::new(dir.path());
        let node = NodeId::new("NodeA");

        let reader = TraceReader::with_wait(&registry, Duration::from_millis(20));
        let err = reader.read("Ping", Some(&node)).expect_err("absent file");
        match err {
            NetnestError::Io { path, .. } => {
                assert!(path.ends_with("NodeA/Ping.strace"));
            }
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn consecutive_reads_of_unchanged_file_are_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = NodeRegistry::new(dir.path());

        let node_dir = dir.path().join("localhost");
        std::fs::create_dir_all(&node_dir).expect("mkdir");
        std::fs::write(node_dir.join("Ping.strace"), "stable").expect("write");

        let reader = TraceReader::with_wait(&registry, Duration::ZERO);
        let first = reader.read("Ping", None).expect("first read");
        let second = reader.read("Ping", None).expect("second read");
        assert_eq!(first, second);
    }

    #[test]
    fn default_wait_matches_constant() {
        let registry = NodeRegistry::new("/tmp/nn");
        let reader = TraceReader::new(&registry);
        assert_eq!(reader.wait, Duration::from_millis(DEFAULT_TRACE_WAIT_MS));
    }
}
