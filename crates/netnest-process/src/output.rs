//! Stdout/stderr capture retrieval.

use std::time::Duration;

use netnest_common::constants::DEFAULT_TRACE_WAIT_MS;
use netnest_common::error::Result;
use netnest_common::types::{NodeId, ProcessTag};
use netnest_node::NodeRegistry;

use crate::capture::{Capture, read_capture};

/// Retrieves the redirected stdout/stderr stream captured for a
/// previously started process. Same contract as
/// [`TraceReader`](crate::trace::TraceReader), over the `.out` file.
#[derive(Debug)]
pub struct OutputReader<'a> {
    registry: &'a NodeRegistry,
    wait: Duration,
}

impl<'a> OutputReader<'a> {
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

    /// Reads the output capture for `tag` on `node`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty tag, an I/O error if
    /// the capture file is missing after the one-shot wait or cannot be
    /// read, and an internal error if the capture is not valid text.
    pub fn read(&self, tag: &str, node: Option<&NodeId>) -> Result<Capture> {
        let tag = ProcessTag::new(tag).inspect_err(|e| {
            tracing::error!(component = "output-reader", error = %e, "precondition failed");
        })?;

        let path = self.registry.output_file(&tag, node);
        match read_capture(&path, self.wait) {
            Ok(contents) => Ok(Capture { path, contents }),
            Err(e) => {
                tracing::error!(
                    component = "output-reader",
                    tag = %tag,
                    path = %path.display(),
                    error = %e,
                    "failed to read output capture"
                );
                Err(e)
            }
        }
    }
}
