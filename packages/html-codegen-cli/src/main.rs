mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.v);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let artifacts =
        html_codegen::generate(&config).context("failed to generate the element builders")?;

    if cli.check {
        let stale = artifacts
            .stale(&config.out_dir)
            .context("failed to compare the generated files")?;
        if !stale.is_empty() {
            bail!("{} generated file(s) are out of date, rerun html-codegen", stale.len());
        }
        tracing::info!("generated files are up to date");
        return Ok(());
    }

    let written = artifacts
        .write(&config.out_dir)
        .with_context(|| format!("failed to write into {}", config.out_dir.display()))?;
    tracing::info!(files = written.len(), "done");
    Ok(())
}
