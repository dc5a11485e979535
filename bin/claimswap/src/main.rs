//! Operator CLI for ClaimSwap: build allowlist trees, look up and verify
//! proofs, and quote pool trades offline.

#![allow(missing_docs, rustdoc::missing_crate_level_docs)]

mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::Cli;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> eyre::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    cli.command.run(&mut stdout)
}
