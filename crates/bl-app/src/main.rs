use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

pub mod app;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Conversion complète avant toute écriture
    let output = app::run(&cli)?;

    // 4. Sortie
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Écriture sur stdout")?;

    Ok(())
}
