//! Typed row mapping
//!
//! Each query maps its columns into one of these records inside the
//! `query_map` closure; decoding of the persisted enum codes happens here
//! and nowhere else.

use garagex_core::errors::GarageError;
use garagex_core::model::{Garage, ParkingSpot, SpotLocation, SpotType, VehicleType};
use rusqlite::Row;

/// Columns selected for a garage row
pub const GARAGE_COLUMNS: &str = "id, levels, rows_per_level, spots_per_row";

/// Columns selected for a full spot row
pub const SPOT_COLUMNS: &str = "id, spot_type, parked_vehicle, garage_id, level, row, spot_num";

/// Columns selected for a spot location
pub const LOCATION_COLUMNS: &str = "id, level, row, spot_num";

pub fn garage_from_row(row: &Row<'_>) -> rusqlite::Result<Garage> {
    Ok(Garage {
        id: row.get(0)?,
        levels: row.get(1)?,
        rows_per_level: row.get(2)?,
        spots_per_row: row.get(3)?,
    })
}

pub fn location_from_row(row: &Row<'_>) -> rusqlite::Result<SpotLocation> {
    Ok(SpotLocation {
        id: row.get(0)?,
        level: row.get(1)?,
        row: row.get(2)?,
        spot_num: row.get(3)?,
    })
}

/// A spot row with its enum columns still encoded
#[derive(Debug, Clone, Copy)]
pub struct SpotRow {
    pub id: i64,
    pub spot_type: i64,
    pub parked_vehicle: Option<i64>,
    pub garage_id: i64,
    pub level: u32,
    pub row: u32,
    pub spot_num: u32,
}

impl SpotRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            spot_type: row.get(1)?,
            parked_vehicle: row.get(2)?,
            garage_id: row.get(3)?,
            level: row.get(4)?,
            row: row.get(5)?,
            spot_num: row.get(6)?,
        })
    }

    /// Decode enum columns
    ///
    /// An unusable spot type decodes to `None` so the park path can report
    /// it; an unknown occupant code is an error because vacancy would
    /// otherwise be misreported.
    ///
    /// # Errors
    /// * `UnknownOccupantCode` - `parked_vehicle` holds an unrecognised code
    pub fn into_spot(self) -> Result<ParkingSpot, GarageError> {
        let spot_type = SpotType::from_code(self.spot_type);
        if spot_type.is_none() {
            tracing::warn!(
                spot_id = self.id,
                code = self.spot_type,
                "Parking spot has no valid spot type"
            );
        }

        let occupant = match self.parked_vehicle {
            None => None,
            Some(code) => Some(VehicleType::from_code(code).ok_or(
                GarageError::UnknownOccupantCode {
                    spot_id: self.id,
                    code,
                },
            )?),
        };

        Ok(ParkingSpot {
            id: self.id,
            garage_id: self.garage_id,
            level: self.level,
            row: self.row,
            spot_num: self.spot_num,
            spot_type,
            occupant,
        })
    }
}
