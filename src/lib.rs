//! hospitrack library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (filter engine, marker placement, session gate, record store).

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
///
/// `init`, `config` and `log` only need the configuration; every other
/// command runs against a fresh [`AppContext`].
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = || AppContext::open(cfg.clone());

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Login { password } => commands::session::login(&mut ctx(), password),
        Commands::Logout => commands::session::logout(&mut ctx()),
        Commands::Status => commands::session::status(&ctx()),
        Commands::Dashboard { floor, tab, map } => {
            commands::dashboard::handle(&mut ctx(), floor, *tab, *map)
        }
        Commands::Assets { filters } => commands::list::assets(&mut ctx(), filters),
        Commands::Patients { filters } => commands::list::patients(&mut ctx(), filters),
        Commands::Alerts { filters } => commands::list::alerts(&mut ctx(), filters),
        Commands::History { filters } => commands::list::history(&mut ctx(), filters),
        Commands::Timelogs { filters } => commands::list::time_logs(&mut ctx(), filters),
        Commands::Locate { id } => commands::locate::handle(&mut ctx(), id),
        Commands::Export { target } => commands::export::handle(&mut ctx(), target),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line override of the state database, resolved like `init` does
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }

    dispatch(&cli, &cfg)
}
