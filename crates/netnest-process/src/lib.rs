//! # netnest-process
//!
//! Read-after-write accessors for the capture files that the process
//! launcher writes for every traced process: the strace log and the
//! redirected stdout/stderr stream. The launcher itself lives elsewhere;
//! this crate only locates a capture by `(tag, node)`, absorbs the
//! launcher startup race with a single bounded wait, and reads the file.

pub mod capture;
pub mod output;
pub mod trace;

pub use capture::Capture;
pub use output::OutputReader;
pub use trace::TraceReader;
