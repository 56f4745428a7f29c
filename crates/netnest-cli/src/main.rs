//! # netnest — network-namespace test harness CLI
//!
//! Daemon-less accessors for a topology of virtual nodes and the capture
//! files of processes traced inside them.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
