//! Binary entry point for shelf.
//!
//! A thin consumer of the repository: manages a consumables store from the
//! command line, opening the repository per invocation and saving explicitly
//! after mutations.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use shelf::models::Consumable;
use shelf::{JsonFileRepository, observability};
use std::path::PathBuf;
use std::process::ExitCode;

/// Shelf - an identity-keyed record repository backed by a JSON file.
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the backing store file.
    #[arg(short, long, global = true, env = "SHELF_STORE", default_value = "consumables.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List all records in the store.
    List,

    /// Show one record by id.
    Get {
        /// The record id.
        id: String,
    },

    /// Insert a record, replacing any existing record with the same id.
    Add {
        /// The record id.
        id: String,

        /// Health restored on use.
        #[arg(long, default_value = "0")]
        health: i32,

        /// Mana restored on use.
        #[arg(long, default_value = "0")]
        mana: i32,

        /// Stamina restored on use.
        #[arg(long, default_value = "0")]
        stamina: i32,
    },

    /// Remove a record by id.
    Remove {
        /// The record id.
        id: String,
    },

    /// Print the number of records in the store.
    Count,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> shelf::Result<()> {
    let mut repo = JsonFileRepository::<Consumable>::open(&cli.store)?;

    match &cli.command {
        Commands::List => {
            for record in &repo {
                match serde_json::to_string_pretty(record) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("error: could not render '{}': {e}", record.id),
                }
            }
            Ok(())
        },
        Commands::Get { id } => {
            match repo.get_by_id(id) {
                Some(record) => match serde_json::to_string_pretty(record) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("error: could not render '{}': {e}", record.id),
                },
                None => println!("no record with id '{id}'"),
            }
            Ok(())
        },
        Commands::Add {
            id,
            health,
            mana,
            stamina,
        } => {
            repo.add(Consumable::new(id.as_str(), *health, *mana, *stamina));
            repo.save()?;
            println!("stored '{id}' ({} total)", repo.count());
            Ok(())
        },
        Commands::Remove { id } => {
            if repo.remove_by_id(id) {
                repo.save()?;
                println!("removed '{id}' ({} remaining)", repo.count());
            } else {
                println!("no record with id '{id}'");
            }
            Ok(())
        },
        Commands::Count => {
            println!("{}", repo.count());
            Ok(())
        },
    }
}
