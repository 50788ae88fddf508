//! CLI subcommands
//!
//! Every subcommand runs against one `Session`: an open, migrated store
//! plus the RNG used for garage layouts.

pub mod garage;
pub mod park;
pub mod reset;
pub mod self_check;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;
use std::path::Path;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub struct Session {
    pub conn: Connection,
    pub rng: ChaCha8Rng,
    pub json: bool,
}

impl Session {
    pub fn open(
        db: &Path,
        seed: Option<u64>,
        json: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = garagex_store::db::open_store(db)?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { conn, rng, json })
    }
}

/// Print a serializable result as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
