//! CLI command definitions and dispatch.

pub mod nodes;
pub mod output;
pub mod strace;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// netnest — Daemon-less network-namespace test harness.
#[derive(Parser, Debug)]
#[command(name = "netnest", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base directory for capture files and state. Defaults to the
    /// session run directory.
    #[arg(long, global = true)]
    pub run_dir: Option<PathBuf>,
}

impl Cli {
    /// Returns the run directory, falling back to the session default.
    #[must_use]
    pub fn run_dir(&self) -> PathBuf {
        self.run_dir
            .clone()
            .unwrap_or_else(|| netnest_common::constants::run_dir().clone())
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display the captured strace of a process running on a node.
    Strace(strace::StraceArgs),
    /// Display the captured stdout/stderr of a process running on a node.
    Output(output::OutputArgs),
    /// List the nodes recorded in the topology index.
    Nodes(nodes::NodesArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let run_dir = cli.run_dir();
    tracing::debug!(run_dir = %run_dir.display(), "dispatching command");
    match cli.command {
        Command::Strace(args) => strace::execute(args, &run_dir),
        Command::Output(args) => output::execute(args, &run_dir),
        Command::Nodes(args) => nodes::execute(args, &run_dir),
    }
}
