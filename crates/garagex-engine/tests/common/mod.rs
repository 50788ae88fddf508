#![allow(dead_code)]

use garagex_core::model::{GarageDimensions, GarageInfo, SpotLocation, SpotType};
use garagex_store::SqliteRepo;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;

/// Fresh migrated in-memory store
pub fn setup_test_db() -> Connection {
    garagex_store::db::open_store_in_memory().unwrap()
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a garage with a fixed seed
pub fn create_garage(conn: &mut Connection, levels: u32, rows: u32, spots: u32) -> GarageInfo {
    garagex_engine::garage_create(
        conn,
        GarageDimensions::new(levels, rows, spots),
        &mut seeded_rng(0xC0FFEE),
    )
    .unwrap()
}

/// Vacant spots of one type, in first-fit order
pub fn vacant_of_type(conn: &Connection, garage_id: i64, spot_type: SpotType) -> Vec<SpotLocation> {
    SqliteRepo::list_vacant_spots(conn, garage_id, &[spot_type]).unwrap()
}
