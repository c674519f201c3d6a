//! pagemart - normalize marketplace product pages into product records

use clap::Parser;
use colored::Colorize;

use pagemart::cli::{Cli, Commands};
use pagemart::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint.yellow());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { file, compact } => commands::cmd_normalize(&file, compact),
        Commands::Id { url } => commands::cmd_id(url.as_deref()),
        Commands::Canon { url } => commands::cmd_canon(&url),
    }
}
