//! Which vehicles may use which spots

use crate::errors::{GarageError, Result};
use crate::model::{ParkingSpot, SpotType, VehicleType};

/// Spot types a vehicle may occupy, in code order
pub fn compatible_spot_types(vehicle: VehicleType) -> &'static [SpotType] {
    match vehicle {
        VehicleType::Motorcycle => &[SpotType::Motorcycle, SpotType::Compact, SpotType::Large],
        VehicleType::Car => &[SpotType::Compact, SpotType::Large],
        VehicleType::Bus => &[SpotType::Large],
    }
}

pub fn is_compatible(vehicle: VehicleType, spot_type: SpotType) -> bool {
    compatible_spot_types(vehicle).contains(&spot_type)
}

/// Check a single spot before parking `vehicle` in it
///
/// Checks run in a fixed order: type present, vacancy, then compatibility.
/// For a bus this only covers the anchor; the rest of the run is checked by
/// `allocation::check_bus_run`.
///
/// # Errors
/// * `SpotTypeUnassigned` - The spot has no usable type
/// * `SpotFull` - The spot is occupied
/// * `IncompatibleSpot` - The vehicle may not use this spot type
pub fn check_spot_for_vehicle(vehicle: VehicleType, spot: &ParkingSpot) -> Result<SpotType> {
    let spot_type = spot
        .spot_type
        .ok_or(GarageError::SpotTypeUnassigned { spot_id: spot.id })?;

    if !spot.is_vacant() {
        return Err(GarageError::SpotFull { spot_id: spot.id });
    }

    if !is_compatible(vehicle, spot_type) {
        return Err(GarageError::IncompatibleSpot {
            spot_id: spot.id,
            vehicle,
            spot_type,
        });
    }

    Ok(spot_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(spot_type: Option<SpotType>, occupant: Option<VehicleType>) -> ParkingSpot {
        ParkingSpot {
            id: 1,
            garage_id: 1,
            level: 0,
            row: 0,
            spot_num: 0,
            spot_type,
            occupant,
        }
    }

    #[test]
    fn test_compatibility_matrix() {
        use SpotType::*;
        let expected = [
            (VehicleType::Motorcycle, [true, true, true]),
            (VehicleType::Car, [false, true, true]),
            (VehicleType::Bus, [false, false, true]),
        ];
        for (vehicle, row) in expected {
            for (spot_type, allowed) in [Motorcycle, Compact, Large].into_iter().zip(row) {
                assert_eq!(
                    is_compatible(vehicle, spot_type),
                    allowed,
                    "{} in {}",
                    vehicle,
                    spot_type
                );
            }
        }
    }

    #[test]
    fn test_missing_type_checked_before_occupancy() {
        let err = check_spot_for_vehicle(
            VehicleType::Car,
            &spot(None, Some(VehicleType::Car)),
        )
        .unwrap_err();
        assert_eq!(err, GarageError::SpotTypeUnassigned { spot_id: 1 });
    }

    #[test]
    fn test_occupied_spot_is_full() {
        let err = check_spot_for_vehicle(
            VehicleType::Motorcycle,
            &spot(Some(SpotType::Large), Some(VehicleType::Car)),
        )
        .unwrap_err();
        assert_eq!(err, GarageError::SpotFull { spot_id: 1 });
    }

    #[test]
    fn test_car_rejected_from_motorcycle_spot() {
        let err = check_spot_for_vehicle(VehicleType::Car, &spot(Some(SpotType::Motorcycle), None))
            .unwrap_err();
        assert!(matches!(err, GarageError::IncompatibleSpot { .. }));
    }

    #[test]
    fn test_bus_rejected_from_compact_spot() {
        let err = check_spot_for_vehicle(VehicleType::Bus, &spot(Some(SpotType::Compact), None))
            .unwrap_err();
        assert!(matches!(
            err,
            GarageError::IncompatibleSpot {
                vehicle: VehicleType::Bus,
                spot_type: SpotType::Compact,
                ..
            }
        ));
    }

    #[test]
    fn test_motorcycle_fits_anywhere_vacant() {
        for spot_type in SpotType::ALL {
            let checked =
                check_spot_for_vehicle(VehicleType::Motorcycle, &spot(Some(spot_type), None));
            assert_eq!(checked, Ok(spot_type));
        }
    }
}
