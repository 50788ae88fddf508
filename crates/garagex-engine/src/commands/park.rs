//! Park command handlers with boundary logging.
//!
//! Both entry points run inside one transaction. `park_vehicle_in_garage`
//! finds a first-fit candidate and then goes through the same checks as
//! `park_vehicle_in_spot`, so a spot chosen by the scan is re-validated
//! against the stored rows before it is written.

#![allow(clippy::result_large_err)]

use garagex_core::allocation::{check_bus_run, select_first_fit, BUS_SPAN};
use garagex_core::errors::GarageError;
use garagex_core::model::VehicleType;
use garagex_core::rules::{check_spot_for_vehicle, compatible_spot_types};
use garagex_core::{log_op_end, log_op_error, log_op_start};
use garagex_store::errors::{from_rusqlite, Result};
use garagex_store::SqliteRepo;
use rusqlite::Connection;

/// Park a vehicle in the first compatible vacant spot of a garage
///
/// Candidates are ordered by `(level, row, spot_num)`. A bus needs
/// `BUS_SPAN` adjacent vacant large spots in one row and is reported by
/// the id of the first spot of that run.
///
/// ## Returns
///
/// Id of the (first) spot the vehicle now occupies
///
/// ## Errors
///
/// - `NoVacantSpot`: nothing in the garage fits the vehicle
/// - `Database`: the garage does not exist or a query failed
pub fn park_vehicle_in_garage(
    conn: &mut Connection,
    vehicle: VehicleType,
    garage_id: i64,
) -> Result<i64> {
    log_op_start!(
        "park_vehicle_in_garage",
        vehicle = vehicle.as_str(),
        garage_id = garage_id
    );
    let start = std::time::Instant::now();

    let result = park_vehicle_in_garage_impl(conn, vehicle, garage_id).map_err(|e| {
        log_op_error!(
            "park_vehicle_in_garage",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            vehicle = vehicle.as_str(),
            garage_id = garage_id
        );
        e
    })?;

    log_op_end!(
        "park_vehicle_in_garage",
        duration_ms = start.elapsed().as_millis() as u64,
        garage_id = garage_id,
        spot_id = result
    );

    Ok(result)
}

fn park_vehicle_in_garage_impl(
    conn: &mut Connection,
    vehicle: VehicleType,
    garage_id: i64,
) -> Result<i64> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    SqliteRepo::require_garage(&tx, garage_id)?;
    let candidates =
        SqliteRepo::list_vacant_spots(&tx, garage_id, compatible_spot_types(vehicle))?;

    let spot_id = select_first_fit(vehicle, &candidates)
        .and_then(|run| run.first())
        .map(|spot| spot.id)
        .ok_or(GarageError::NoVacantSpot { garage_id, vehicle })?;

    occupy(&tx, vehicle, spot_id)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(spot_id)
}

/// Park a vehicle in a specific spot
///
/// For a bus, `spot_id` is the first of `BUS_SPAN` spots that must share
/// its level and row, follow it in spot number, be large and be vacant.
/// All of them are occupied together.
///
/// ## Returns
///
/// Ids of every spot now occupied by the vehicle, in spot-number order
///
/// ## Errors
///
/// - `InvalidId`: `spot_id` is negative
/// - `Database`: no such spot, or a query failed
/// - `InvalidSpotType`: the spot has no usable type
/// - `SpotFull`: the spot is occupied
/// - `InvalidSpot`: the vehicle may not use this spot, or the bus run is broken
pub fn park_vehicle_in_spot(
    conn: &mut Connection,
    vehicle: VehicleType,
    spot_id: i64,
) -> Result<Vec<i64>> {
    log_op_start!(
        "park_vehicle_in_spot",
        vehicle = vehicle.as_str(),
        spot_id = spot_id
    );
    let start = std::time::Instant::now();

    let result = park_vehicle_in_spot_impl(conn, vehicle, spot_id).map_err(|e| {
        log_op_error!(
            "park_vehicle_in_spot",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            vehicle = vehicle.as_str(),
            spot_id = spot_id
        );
        e
    })?;

    log_op_end!(
        "park_vehicle_in_spot",
        duration_ms = start.elapsed().as_millis() as u64,
        spot_id = spot_id,
        spot_count = result.len() as u64
    );

    Ok(result)
}

fn park_vehicle_in_spot_impl(
    conn: &mut Connection,
    vehicle: VehicleType,
    spot_id: i64,
) -> Result<Vec<i64>> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let occupied = occupy(&tx, vehicle, spot_id)?;
    tx.commit().map_err(from_rusqlite)?;
    Ok(occupied)
}

/// Validate `spot_id` for `vehicle` and mark the spot(s) occupied
fn occupy(conn: &Connection, vehicle: VehicleType, spot_id: i64) -> Result<Vec<i64>> {
    if spot_id < 0 {
        return Err(GarageError::InvalidId { id: spot_id }.into());
    }

    let spot = SqliteRepo::require_spot(conn, spot_id)?;
    check_spot_for_vehicle(vehicle, &spot)?;

    let spot_ids = match vehicle {
        VehicleType::Motorcycle | VehicleType::Car => vec![spot.id],
        VehicleType::Bus => {
            let segment = SqliteRepo::list_row_segment(
                conn,
                spot.garage_id,
                spot.level,
                spot.row,
                spot.spot_num,
                BUS_SPAN,
            )?;
            check_bus_run(&spot, &segment)?
        }
    };

    SqliteRepo::set_occupant(conn, &spot_ids, vehicle)?;
    Ok(spot_ids)
}
