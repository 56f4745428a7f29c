//! Shared capture-file read path.
//!
//! Both the strace and the stdout/stderr readers go through
//! [`read_capture`]: check for the file, wait once if it is absent, then
//! make exactly one read attempt. The wait is a bounded mitigation for
//! the race with a launcher that is still setting up the redirect — not
//! a synchronization mechanism. A writer that is still appending when
//! the read happens is neither detected nor prevented.

use std::path::{Path, PathBuf};
use std::time::Duration;

use netnest_common::error::{NetnestError, Result};

/// Contents of a capture file at the moment it was read.
///
/// Produced only after a successful read of an existing file; a failed
/// read never yields partial content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Resolved path the contents were read from.
    pub path: PathBuf,
    /// Full file contents as text.
    pub contents: String,
}

/// Reads a capture file, waiting out the startup race at most once.
///
/// If `path` does not exist at first check, sleeps for `wait` and then
/// proceeds to the read regardless of whether the file has appeared.
pub(crate) fn read_capture(path: &Path, wait: Duration) -> Result<String> {
    if !path.exists() {
        tracing::debug!(
            path = %path.display(),
            wait = ?wait,
            "capture file absent, waiting once for writer"
        );
        std::thread::sleep(wait);
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => NetnestError::Internal {
            message: format!("failed to read capture file: {}", path.display()),
        },
        _ => NetnestError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn existing_file_is_read_without_waiting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Ping.strace");
        std::fs::write(&path, "execve(...)\n").expect("write");

        let start = Instant::now();
        let contents = read_capture(&path, Duration::from_secs(2)).expect("read");
        assert_eq!(contents, "execve(...)\n");
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn absent_file_waits_once_then_fails_with_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.strace");
        let wait = Duration::from_millis(50);

        let start = Instant::now();
        let err = read_capture(&path, wait).expect_err("file never appears");
        assert!(start.elapsed() >= wait);

        match err {
            NetnestError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn file_appearing_during_the_wait_is_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("late.strace");

        let writer_path = path.clone();
        let writer = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(30));
            std::fs::write(&writer_path, "late content").expect("write");
        });

        let contents = read_capture(&path, Duration::from_millis(200)).expect("read");
        assert_eq!(contents, "late content");
        writer.join().expect("writer thread");
    }

    #[test]
    fn non_utf8_capture_is_an_internal_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("binary.strace");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).expect("write");

        let err = read_capture(&path, Duration::ZERO).expect_err("invalid utf-8");
        match err {
            NetnestError::Internal { message } => {
                assert!(message.contains("binary.strace"));
            }
            other => panic!("expected Internal error, got {other}"),
        }
    }
}
