mod app;
mod config;

use anyhow::Context;
use clap::Parser;
use eframe::run_native;

use crate::app::LifeApp;
use crate::config::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config().context("invalid configuration")?;
    log::info!(
        "starting {}x{} board, interval {}, density {}",
        config.rows,
        config.cols,
        config.interval,
        config.density
    );

    run_native(
        "Game of Life GUI",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            let app = LifeApp::new(cc, config)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("gui exited with an error: {err}"))?;
    Ok(())
}
