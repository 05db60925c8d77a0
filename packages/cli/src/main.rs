mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    check, drop_component, palette, targets, CheckArgs, DropArgs, PaletteArgs, TargetsArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Montage CLI - drag-and-drop editing of video scene scripts
#[derive(Parser, Debug)]
#[command(name = "montage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify documents survive a round trip through the editor
    Check(CheckArgs),

    /// List the drop targets of a document
    Targets(TargetsArgs),

    /// Drop a component onto a target and print the result
    Drop(DropArgs),

    /// Print the components offered for dragging
    Palette(PaletteArgs),
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .context("Cannot get current directory")?
        .display()
        .to_string();

    let config = Config::load(&cwd)?;
    init_logging(&config);

    match cli.command {
        Command::Check(args) => check(args, &config),
        Command::Targets(args) => targets(args, &config),
        Command::Drop(args) => drop_component(args, &config),
        Command::Palette(args) => palette(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
