//! `netnest output` — Display the captured stdout/stderr of a process.

use std::path::Path;
use std::time::Duration;

use clap::Args;
use netnest_common::constants::DEFAULT_TRACE_WAIT_MS;
use netnest_common::types::NodeId;
use netnest_node::NodeRegistry;
use netnest_process::OutputReader;

/// Arguments for the `output` command.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Name of the process.
    pub tag: String,

    /// Node the process is running on. Omit for localhost.
    #[arg(short, long)]
    pub node: Option<String>,

    /// One-shot wait in milliseconds if the capture is not yet present.
    #[arg(long, default_value_t = DEFAULT_TRACE_WAIT_MS)]
    pub wait_ms: u64,
}

/// Executes the `output` command.
///
/// # Errors
///
/// Returns an error if the tag is empty or the capture cannot be read.
pub fn execute(args: OutputArgs, run_dir: &Path) -> anyhow::Result<()> {
    let registry = NodeRegistry::new(run_dir);
    let node = args.node.map(NodeId::new);
    let reader = OutputReader::with_wait(&registry, Duration::from_millis(args.wait_ms));

    let capture = reader
        .read(&args.tag, node.as_ref())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    print!("{}", capture.contents);

    Ok(())
}
