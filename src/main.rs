// SPDX-License-Identifier: MIT

//! Binary entry point: logging setup, then hand off to the UI shell.

mod app;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing()?;
    tracing::info!("starting optionize");

    app::run().map_err(|err| anyhow::anyhow!("Failed to run UI: {err}"))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| anyhow::anyhow!("Failed to set tracing subscriber: {err}"))
}
