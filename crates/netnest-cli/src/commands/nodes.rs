//! `netnest nodes` — List the nodes recorded in the topology index.

use std::path::Path;

use clap::Args;
use netnest_node::state;

/// Arguments for the `nodes` command.
#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Print the index as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `nodes` command.
///
/// # Errors
///
/// Returns an error if the state index exists but cannot be read.
pub fn execute(args: NodesArgs, run_dir: &Path) -> anyhow::Result<()> {
    let state_file = run_dir.join("state.json");
    let records = state::load_state(&state_file).map_err(|e| anyhow::anyhow!("{e}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No nodes recorded in {}", state_file.display());
        return Ok(());
    }

    println!("{:<24} {:<12} CREATED", "NODE", "KIND");
    for record in &records {
        println!("{:<24} {:<12} {}", record.id, record.kind, record.created_at);
    }

    Ok(())
}
