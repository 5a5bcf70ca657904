use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todoline::cli::args::{Cli, Commands};
use todoline::cli::commands;
use todoline::config::Config;
use todoline::core::SystemClock;

fn main() {
    // Tracing is opt-in via RUST_LOG; an unusable filter means no logging.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let clock = SystemClock;

    let output = match cli.command {
        Commands::Parse { line } => commands::parse(&line, &clock, format)?,
        Commands::Normalize { line } => commands::normalize(&line, &clock, format)?,
        Commands::Done { line, date } => commands::done(&line, date.as_deref(), &clock, format)?,
        Commands::Undo { line } => commands::undo(&line, &clock, format)?,
        Commands::Same { first, second } => commands::same(&first, &second, &clock, format)?,
        Commands::New(args) => commands::new_task(args, &config.format, &clock, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
