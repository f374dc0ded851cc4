//! pestwatch library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Whoami => cli::commands::whoami::handle(cfg),
        Commands::Signup { .. } => cli::commands::signup::handle(&cli.command, cfg),
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg),
        Commands::Password { .. } => cli::commands::password::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Detect => cli::commands::detect::handle(cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Analysis => cli::commands::analysis::handle(cfg),
        Commands::Ops { .. } => cli::commands::ops::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Storage { .. } => cli::commands::storage::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply the storage override from the command line, if any
    if let Some(custom_storage) = &cli.storage {
        cfg.storage = utils::path::expand_tilde(custom_storage)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
