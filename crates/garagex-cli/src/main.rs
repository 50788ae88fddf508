//! Garagex CLI
//!
//! Command-line interface for the garage allocation engine

use clap::{Parser, Subcommand, ValueEnum};
use garagex_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "garagex")]
#[command(about = "Garagex - Parking garage spot allocation", long_about = None)]
struct Cli {
    /// SQLite store file, created and migrated on first use
    #[arg(value_name = "DB_PATH", default_value = garagex_store::db::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Seed for the spot-type rotation (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log output format (RUST_LOG overrides the filter)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a garage and its parking spots
    Create(commands::garage::CreateArgs),
    /// Show a garage's dimensions and vacancy
    Garage(commands::garage::GarageArgs),
    /// Show a single parking spot
    Spot(commands::garage::SpotArgs),
    /// Park a vehicle in the first compatible vacant spot of a garage
    Park(commands::park::ParkArgs),
    /// Park a vehicle in a specific spot
    ParkSpot(commands::park::ParkSpotArgs),
    /// Drop and recreate the garage schema
    Reset,
    /// Run the built-in allocation scenarios against a fresh schema
    SelfCheck,
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = commands::Session::open(&cli.db, cli.seed, cli.json).and_then(|mut session| {
        match cli.command.unwrap_or(Commands::SelfCheck) {
            Commands::Create(args) => commands::garage::execute_create(&mut session, args),
            Commands::Garage(args) => commands::garage::execute_garage(&session, args),
            Commands::Spot(args) => commands::garage::execute_spot(&session, args),
            Commands::Park(args) => commands::park::execute_park(&mut session, args),
            Commands::ParkSpot(args) => commands::park::execute_park_spot(&mut session, args),
            Commands::Reset => commands::reset::execute(&mut session),
            Commands::SelfCheck => commands::self_check::execute(&mut session),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
