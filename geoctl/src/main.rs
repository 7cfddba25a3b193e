//! This is a command-line tool to manage a database of georeferenced
//! locations via [libgeo]
use crate::{cli::*, config::Config};
use anyhow::{Result, anyhow};
use clap::Parser;
use libgeo::core::database::Database;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod output;
mod prompt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Cli::parse();
    let config_file = config::config_file().await?;

    match args.command {
        Commands::Use { database } => {
            let cfg = Config::new(database.clone());
            cfg.save_to_file(&config_file).await?;
            println!("Using database '{}'", database.to_string_lossy());
            Ok(())
        }
        Commands::Status => {
            let cfg = Config::load_from_file(&config_file).await?;
            println!("Using database '{}'", cfg.database.to_string_lossy());
            Ok(())
        }
        command => {
            let database = match args.database {
                Some(database) => database,
                None => Config::load_from_file(&config_file)
                    .await
                    .map(|cfg| cfg.database)
                    .map_err(|_| {
                        anyhow!("No database specified; pass --database or run 'geoctl use'")
                    })?,
            };
            debug!(?database, "opening database");
            let db = Database::open(&database).await?;
            commands::locations::handle_command(command, &db).await
        }
    }
}
