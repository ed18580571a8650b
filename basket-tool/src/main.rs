mod config;
mod error;
mod logging;
mod tui;

use std::path::PathBuf;

use basket_core::Category;
use clap::{Parser, Subcommand};

use crate::config::{Overrides, load_config, resolve_settings};

#[derive(Parser)]
#[command(name = "bsk")]
#[command(about = "Shopping list in the terminal", long_about = None)]
struct Cli {
    /// Path to config.toml (default: <config dir>/basket/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seconds an alert stays on screen
    #[arg(long, global = true)]
    alert_secs: Option<u64>,

    /// Currency symbol shown before prices
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Write logs to this file (filter with BASKET_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive shopping list (default)
    Run,

    /// Print the categories items can be filed under
    Categories,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let settings = resolve_settings(
        config,
        Overrides {
            alert_secs: cli.alert_secs,
            currency: cli.currency,
            log_file: cli.log_file,
        },
    );

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            logging::init(settings.log_file.as_deref())?;
            tui::run(&settings)?;
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{}", category);
            }
            println!("{}", Category::display(None));
        }
    }

    Ok(())
}
