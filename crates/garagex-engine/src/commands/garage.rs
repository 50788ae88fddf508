//! Garage command handlers with boundary logging.
//!
//! - `garage_create`: validate dimensions, persist the garage and its spot
//!   layout in one transaction
//! - `garage_get`: dimensions plus vacant and filled spot ids
//! - `spot_get`: a single parking spot
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`). The store and core layers only emit `tracing::debug!`.

#![allow(clippy::result_large_err)]

use garagex_core::errors::{ExError, GarageError};
use garagex_core::model::{GarageDimensions, GarageInfo, ParkingSpot};
use garagex_core::rules::plan_row_types;
use garagex_core::{log_op_end, log_op_error, log_op_start};
use garagex_store::errors::{from_rusqlite, Result};
use garagex_store::SqliteRepo;
use rand::Rng;
use rusqlite::Connection;

/// Create a garage and all of its parking spots
///
/// Each row receives one spot type drawn from the per-level rotation; `rng`
/// drives the draw, so a seeded generator gives a reproducible layout. The
/// garage row and every spot row are written in one transaction: on any
/// failure nothing is left behind.
///
/// ## Errors
///
/// - `InvalidArguments`: a dimension is zero (nothing is written)
/// - `Database`: the store rejected a write
pub fn garage_create<R: Rng + ?Sized>(
    conn: &mut Connection,
    dims: GarageDimensions,
    rng: &mut R,
) -> Result<GarageInfo> {
    log_op_start!(
        "garage_create",
        levels = dims.levels,
        rows_per_level = dims.rows_per_level,
        spots_per_row = dims.spots_per_row
    );
    let start = std::time::Instant::now();

    let result = garage_create_impl(conn, dims, rng).map_err(|e| {
        log_op_error!(
            "garage_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "garage_create",
        duration_ms = start.elapsed().as_millis() as u64,
        garage_id = result.id,
        spot_count = result.total_spots() as u64
    );

    Ok(result)
}

fn garage_create_impl<R: Rng + ?Sized>(
    conn: &mut Connection,
    dims: GarageDimensions,
    rng: &mut R,
) -> Result<GarageInfo> {
    dims.validate().map_err(ExError::from)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let garage_id = SqliteRepo::insert_garage(&tx, &dims)?;
    let plan = plan_row_types(&dims, rng);
    SqliteRepo::insert_spots(&tx, garage_id, &plan, dims.spots_per_row)?;

    let info = load_garage_info(&tx, garage_id)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(info)
}

/// Get a garage's dimensions and vacancy
///
/// Both id lists are ascending.
///
/// ## Errors
///
/// - `Database`: the garage does not exist or a query failed
pub fn garage_get(conn: &Connection, garage_id: i64) -> Result<GarageInfo> {
    log_op_start!("garage_get", garage_id = garage_id);
    let start = std::time::Instant::now();

    let result = load_garage_info(conn, garage_id).map_err(|e| {
        log_op_error!(
            "garage_get",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            garage_id = garage_id
        );
        e
    })?;

    log_op_end!(
        "garage_get",
        duration_ms = start.elapsed().as_millis() as u64,
        garage_id = garage_id
    );

    Ok(result)
}

pub(crate) fn load_garage_info(conn: &Connection, garage_id: i64) -> Result<GarageInfo> {
    let garage = SqliteRepo::require_garage(conn, garage_id)?;
    let vacant = SqliteRepo::list_spot_ids(conn, garage_id, true)?;
    let filled = SqliteRepo::list_spot_ids(conn, garage_id, false)?;
    Ok(GarageInfo::from_parts(garage, vacant, filled))
}

/// Get a parking spot's location, type and occupant
///
/// ## Errors
///
/// - `InvalidId`: `spot_id` is negative
/// - `Database`: no such spot, or the query failed
pub fn spot_get(conn: &Connection, spot_id: i64) -> Result<ParkingSpot> {
    log_op_start!("spot_get", spot_id = spot_id);
    let start = std::time::Instant::now();

    let result = spot_get_impl(conn, spot_id).map_err(|e| {
        log_op_error!(
            "spot_get",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            spot_id = spot_id
        );
        e
    })?;

    log_op_end!(
        "spot_get",
        duration_ms = start.elapsed().as_millis() as u64,
        spot_id = spot_id
    );

    Ok(result)
}

fn spot_get_impl(conn: &Connection, spot_id: i64) -> Result<ParkingSpot> {
    if spot_id < 0 {
        return Err(GarageError::InvalidId { id: spot_id }.into());
    }
    SqliteRepo::require_spot(conn, spot_id)
}
