//! First-fit spot selection
//!
//! Inputs are vacancy lists that the store has already filtered to the
//! vehicle's compatible spot types and ordered by `(level, row, spot_num)`.
//! Selection never looks at storage, which keeps every rule here testable
//! without a database.

use crate::errors::{GarageError, Result};
use crate::model::{ParkingSpot, SpotLocation, SpotType, VehicleType};

/// Number of adjacent large spots a bus occupies
pub const BUS_SPAN: usize = 5;

/// Find the first run of `span` spots sharing level and row with
/// unit-incrementing spot numbers
///
/// `spots` must be sorted by `(level, row, spot_num)`. When a candidate
/// anchor fails at offset `k`, the scan resumes at the failing entry: any
/// anchor strictly between the two would need that same entry at the same
/// spot number, so no valid run is skipped.
pub fn find_contiguous_run(spots: &[SpotLocation], span: usize) -> Option<&[SpotLocation]> {
    if span == 0 {
        return None;
    }

    let mut anchor = 0;
    while anchor + span <= spots.len() {
        let first = &spots[anchor];
        let mismatch = (1..span).find(|&offset| !spots[anchor + offset].continues(first, offset));
        match mismatch {
            None => return Some(&spots[anchor..anchor + span]),
            Some(offset) => anchor += offset,
        }
    }
    None
}

/// Pick the spots a vehicle should take from an ordered vacancy list
///
/// Returns one spot for motorcycles and cars, and a full contiguous run for
/// buses; `None` if nothing fits.
pub fn select_first_fit(vehicle: VehicleType, candidates: &[SpotLocation]) -> Option<&[SpotLocation]> {
    match vehicle {
        VehicleType::Motorcycle | VehicleType::Car => candidates.get(..1),
        VehicleType::Bus => find_contiguous_run(candidates, BUS_SPAN),
    }
}

/// Verify that `anchor` starts a full run of vacant large spots
///
/// `row_spots` are the stored spots of the anchor's garage, level and row
/// whose spot numbers fall in `anchor.spot_num .. anchor.spot_num + BUS_SPAN`,
/// ordered by spot number. Returns the ids of the run in order.
///
/// # Errors
/// * `BusRunUnavailable` - A spot of the run is missing, occupied or not large
pub fn check_bus_run(anchor: &ParkingSpot, row_spots: &[ParkingSpot]) -> Result<Vec<i64>> {
    let unavailable = || GarageError::BusRunUnavailable {
        spot_id: anchor.id,
        required: BUS_SPAN,
    };

    if row_spots.len() != BUS_SPAN {
        return Err(unavailable());
    }

    let anchor_location = anchor.location();
    let mut ids = Vec::with_capacity(BUS_SPAN);
    for (offset, spot) in row_spots.iter().enumerate() {
        let in_place = spot.garage_id == anchor.garage_id
            && spot.location().continues(&anchor_location, offset);
        if !in_place || spot.spot_type != Some(SpotType::Large) || !spot.is_vacant() {
            tracing::debug!(
                anchor_id = anchor.id,
                spot_id = spot.id,
                offset,
                "Bus run broken"
            );
            return Err(unavailable());
        }
        ids.push(spot.id);
    }
    Ok(ids)
}
