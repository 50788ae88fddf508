//! Engine-level write commands.

#![allow(clippy::result_large_err)]

use garagex_core::model::{GarageDimensions, GarageInfo, VehicleType};
use garagex_store::errors::Result;
use rand::Rng;
use rusqlite::Connection;
use serde::Serialize;

/// Commands that mutate the garage store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Create a garage and its spot layout.
    CreateGarage { dims: GarageDimensions },
    /// Park in the first compatible vacant spot of a garage.
    ParkVehicleInGarage {
        vehicle: VehicleType,
        garage_id: i64,
    },
    /// Park in an explicit spot (the first of the run, for a bus).
    ParkVehicleInSpot { vehicle: VehicleType, spot_id: i64 },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EngineCommandResult {
    GarageCreated(GarageInfo),
    ParkedInGarage { spot_id: i64 },
    ParkedInSpot { spot_ids: Vec<i64> },
}

/// Apply an engine command.
///
/// `rng` is only consulted by `CreateGarage`.
pub fn apply_engine_command<R: Rng + ?Sized>(
    cmd: EngineCommand,
    conn: &mut Connection,
    rng: &mut R,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::CreateGarage { dims } => {
            crate::commands::garage::garage_create(conn, dims, rng)
                .map(EngineCommandResult::GarageCreated)
        }
        EngineCommand::ParkVehicleInGarage { vehicle, garage_id } => {
            crate::commands::park::park_vehicle_in_garage(conn, vehicle, garage_id)
                .map(|spot_id| EngineCommandResult::ParkedInGarage { spot_id })
        }
        EngineCommand::ParkVehicleInSpot { vehicle, spot_id } => {
            crate::commands::park::park_vehicle_in_spot(conn, vehicle, spot_id)
                .map(|spot_ids| EngineCommandResult::ParkedInSpot { spot_ids })
        }
    }
}
