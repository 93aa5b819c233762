//! `watchlog` terminal front end.
//!
//! # Responsibility
//! - Parse flags, open the tracker once per invocation, run one command.
//! - Report validation failures as warnings; everything else is an error.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use watchlog_core::{default_log_level, init_logging, StoreError, Tracker, TrackerConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    start_logging(&cli)?;
    let config = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::in_dir(&cli.data_dir),
    };
    info!(
        "event=cli_start module=cli status=ok catalog={} seasonal={} reading={}",
        config.catalog_path.display(),
        config.seasonal_path.display(),
        config.reading_path.display()
    );

    let mut tracker = Tracker::open(config).context("failed to load tracker data")?;
    let output = commands::Output { json: cli.json };
    let outcome = match cli.command {
        Commands::List { names, genres } => {
            commands::catalog::list(&tracker, &output, names, genres)
        }
        Commands::Add(args) => commands::catalog::add(&mut tracker, args),
        Commands::Edit {
            current_name,
            fields,
        } => commands::catalog::edit(&mut tracker, &current_name, fields),
        Commands::Remove { name } => commands::catalog::remove(&mut tracker, &name),
        Commands::Season { command } => commands::season::run(&mut tracker, &output, command),
        Commands::Reading { command } => commands::reading::run(&mut tracker, &output, command),
    };

    match outcome {
        Err(err) => match err.downcast_ref::<StoreError>() {
            Some(StoreError::Validation(reason)) => {
                eprintln!("warning: {reason}; nothing was saved");
                Ok(())
            }
            _ => Err(err),
        },
        Ok(()) => Ok(()),
    }
}

/// Starts file logging only when `--log-dir` is given.
fn start_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let log_dir = std::path::absolute(log_dir)
        .with_context(|| format!("invalid log directory `{}`", log_dir.display()))?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());

    init_logging(level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)
}
