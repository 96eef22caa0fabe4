//! locandine library root.
//!
//! The core is two pure functions: [`core::extract`] turns poster OCR text
//! into an [`EventRecord`](models::event_record::EventRecord), and
//! [`core::chrono_key`] orders records by their free-form Italian date.
//! Everything else (store, import, backup, export, CLI) is plumbing around
//! them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::chrono_key::{SortKey, sort_key};
pub use crate::core::extract::{ExtractOptions, Extractor, extract};
pub use crate::models::event_record::EventRecord;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Extract { .. } => cli::commands::extract::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::List { .. } | Commands::Show { .. } => {
            cli::commands::list::handle(&cli.command, cfg)
        }
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Sort => cli::commands::sort::handle(cfg),
        Commands::Backup { .. } | Commands::Restore { .. } | Commands::Reset { .. } => {
            cli::commands::backup::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (in test mode: solo default)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ override del file eventi da riga di comando
    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    tracing::debug!(data = %cfg.data_file, test = cli.test, "configuration resolved");

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
