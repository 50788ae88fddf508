//! SQLite repository implementation
//!
//! Reads and writes garage and spot rows. Functions take `&Connection` so
//! callers decide the transaction scope: pass a `rusqlite::Transaction`
//! (it derefs to `Connection`) to group several calls into one commit.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::rows::{
    garage_from_row, location_from_row, SpotRow, GARAGE_COLUMNS, LOCATION_COLUMNS, SPOT_COLUMNS,
};
use garagex_core::errors::{ExError, GarageError};
use garagex_core::model::{
    Garage, GarageDimensions, ParkingSpot, SpotLocation, SpotType, VehicleType,
};
use garagex_core::rules::RowPlan;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// SQLite repository for garages and parking spots
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a garage row and return its id
    pub fn insert_garage(conn: &Connection, dims: &GarageDimensions) -> Result<i64> {
        conn.execute(
            "INSERT INTO garages (levels, rows_per_level, spots_per_row) VALUES (?1, ?2, ?3)",
            rusqlite::params![dims.levels, dims.rows_per_level, dims.spots_per_row],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert `spots_per_row` spots for every planned row
    ///
    /// Spots are written in plan order with ascending `spot_num`, so ids grow
    /// with `(level, row, spot_num)`. Returns the number of spots written.
    pub fn insert_spots(
        conn: &Connection,
        garage_id: i64,
        plan: &[RowPlan],
        spots_per_row: u32,
    ) -> Result<usize> {
        let mut stmt = conn
            .prepare_cached(
                "INSERT INTO parking_spots (garage_id, level, row, spot_num, spot_type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(from_rusqlite)?;

        let mut written = 0;
        for row_plan in plan {
            for spot_num in 0..spots_per_row {
                stmt.execute(rusqlite::params![
                    garage_id,
                    row_plan.level,
                    row_plan.row,
                    spot_num,
                    row_plan.spot_type.code(),
                ])
                .map_err(from_rusqlite)?;
                written += 1;
            }
        }

        tracing::debug!(garage_id, spots = written, "Inserted parking spots");
        Ok(written)
    }

    /// Get a garage by id
    pub fn get_garage(conn: &Connection, garage_id: i64) -> Result<Option<Garage>> {
        conn.query_row(
            &format!("SELECT {} FROM garages WHERE id = ?1", GARAGE_COLUMNS),
            [garage_id],
            garage_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a garage by id, failing if it does not exist
    ///
    /// # Errors
    /// * `Database` - The garage does not exist or the query failed
    pub fn require_garage(conn: &Connection, garage_id: i64) -> Result<Garage> {
        Self::get_garage(conn, garage_id)?
            .ok_or_else(|| ExError::from(GarageError::GarageNotFound { garage_id }))
    }

    /// Ids of a garage's vacant or filled spots, ascending
    pub fn list_spot_ids(conn: &Connection, garage_id: i64, vacant: bool) -> Result<Vec<i64>> {
        let sql = if vacant {
            "SELECT id FROM parking_spots
             WHERE garage_id = ?1 AND parked_vehicle IS NULL
             ORDER BY id ASC"
        } else {
            "SELECT id FROM parking_spots
             WHERE garage_id = ?1 AND parked_vehicle IS NOT NULL
             ORDER BY id ASC"
        };

        let mut stmt = conn.prepare_cached(sql).map_err(from_rusqlite)?;
        let ids = stmt
            .query_map([garage_id], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<i64>, _>>()
            .map_err(from_rusqlite)?;
        Ok(ids)
    }

    /// Get a parking spot by id
    pub fn get_spot(conn: &Connection, spot_id: i64) -> Result<Option<ParkingSpot>> {
        let raw = conn
            .query_row(
                &format!("SELECT {} FROM parking_spots WHERE id = ?1", SPOT_COLUMNS),
                [spot_id],
                SpotRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        raw.map(|r| r.into_spot().map_err(ExError::from))
            .transpose()
    }

    /// Get a parking spot by id, failing if it does not exist
    ///
    /// # Errors
    /// * `Database` - The spot does not exist, its stored occupant code is
    ///   unknown, or the query failed
    pub fn require_spot(conn: &Connection, spot_id: i64) -> Result<ParkingSpot> {
        Self::get_spot(conn, spot_id)?
            .ok_or_else(|| ExError::from(GarageError::SpotNotFound { spot_id }))
    }

    /// Vacant spots of the given types in one garage
    ///
    /// Ordered by `(level, row, spot_num)`, the first-fit order.
    pub fn list_vacant_spots(
        conn: &Connection,
        garage_id: i64,
        spot_types: &[SpotType],
    ) -> Result<Vec<SpotLocation>> {
        if spot_types.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; spot_types.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM parking_spots
             WHERE garage_id = ? AND parked_vehicle IS NULL AND spot_type IN ({})
             ORDER BY level ASC, row ASC, spot_num ASC",
            LOCATION_COLUMNS, placeholders
        );
        let params: Vec<i64> = std::iter::once(garage_id)
            .chain(spot_types.iter().map(|t| t.code()))
            .collect();

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let spots = stmt
            .query_map(params_from_iter(params), location_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        tracing::debug!(garage_id, candidates = spots.len(), "Listed vacant spots");
        Ok(spots)
    }

    /// Spots of one row starting at `first_spot_num`, at most `count` of them
    ///
    /// Ordered by `spot_num`. Missing positions are simply absent.
    pub fn list_row_segment(
        conn: &Connection,
        garage_id: i64,
        level: u32,
        row: u32,
        first_spot_num: u32,
        count: usize,
    ) -> Result<Vec<ParkingSpot>> {
        let last_spot_num = u64::from(first_spot_num) + count.saturating_sub(1) as u64;
        let mut stmt = conn
            .prepare_cached(&format!(
                "SELECT {} FROM parking_spots
                 WHERE garage_id = ?1 AND level = ?2 AND row = ?3
                   AND spot_num BETWEEN ?4 AND ?5
                 ORDER BY spot_num ASC",
                SPOT_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let raw = stmt
            .query_map(
                rusqlite::params![garage_id, level, row, first_spot_num, last_spot_num as i64],
                SpotRow::from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        raw.into_iter()
            .map(|r| r.into_spot().map_err(ExError::from))
            .collect()
    }

    /// Mark the given spots as occupied by `vehicle`
    ///
    /// Each update only applies to a still-vacant spot; if any spot was
    /// taken in the meantime the call fails with `SpotFull` and the caller's
    /// transaction must be dropped.
    ///
    /// # Errors
    /// * `SpotFull` - A spot is already occupied or no longer exists
    /// * `Database` - The update failed
    pub fn set_occupant(conn: &Connection, spot_ids: &[i64], vehicle: VehicleType) -> Result<()> {
        let mut stmt = conn
            .prepare_cached(
                "UPDATE parking_spots SET parked_vehicle = ?1
                 WHERE id = ?2 AND parked_vehicle IS NULL",
            )
            .map_err(from_rusqlite)?;

        for &spot_id in spot_ids {
            let changed = stmt
                .execute(rusqlite::params![vehicle.code(), spot_id])
                .map_err(from_rusqlite)?;
            if changed != 1 {
                return Err(GarageError::SpotFull { spot_id }.into());
            }
        }

        tracing::debug!(?spot_ids, vehicle = %vehicle, "Marked spots occupied");
        Ok(())
    }

    /// Number of spots stored for a garage
    pub fn count_spots(conn: &Connection, garage_id: i64) -> Result<u64> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM parking_spots WHERE garage_id = ?1",
                [garage_id],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        Ok(count.max(0) as u64)
    }
}
