//! # storefront
//!
//! Command-line front end for the Shahidaana storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Static page into dist/index.html
//! storefront render --variant extended
//!
//! # What the page will list
//! storefront catalog --json
//!
//! # Watch the hero slider rotate
//! storefront preview --ticks 6 --interval-ms 500
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::Args;

async fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("storefront v{}", env!("CARGO_PKG_VERSION"));
    commands::dispatch(args).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[storefront] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
