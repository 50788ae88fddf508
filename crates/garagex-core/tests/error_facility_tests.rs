use garagex_core::errors::{ExError, ExErrorKind, GarageError};
use garagex_core::model::{GarageDimensions, SpotType, VehicleType};

#[test]
fn test_zero_dimension_is_invalid_arguments() {
    let err: ExError = GarageDimensions::new(2, 0, 4).validate().unwrap_err().into();

    assert_eq!(err.kind(), ExErrorKind::InvalidArguments);
    assert_eq!(err.code(), "ERR_INVALID_ARGUMENTS");
    assert!(err.message().contains("rows_per_level=0"));
}

#[test]
fn test_missing_garage_is_database_with_entity() {
    let err: ExError = GarageError::GarageNotFound { garage_id: 12 }.into();

    assert_eq!(err.kind(), ExErrorKind::Database);
    assert_eq!(err.entity_id(), Some("12"));
}

#[test]
fn test_incompatible_spot_is_invalid_spot() {
    let err: ExError = GarageError::IncompatibleSpot {
        spot_id: 3,
        vehicle: VehicleType::Car,
        spot_type: SpotType::Motorcycle,
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::InvalidSpot);
    assert_eq!(err.message(), "A car cannot park in motorcycle spot 3");
}

#[test]
fn test_unassigned_type_distinct_from_invalid_spot() {
    let err: ExError = GarageError::SpotTypeUnassigned { spot_id: 8 }.into();

    assert_eq!(err.kind(), ExErrorKind::InvalidSpotType);
    assert_ne!(err.kind(), ExErrorKind::InvalidSpot);
}

#[test]
fn test_vehicle_parse_failure_kind() {
    let err: ExError = "truck".parse::<VehicleType>().unwrap_err().into();

    assert_eq!(err.kind(), ExErrorKind::InvalidVehicleType);
    assert!(err.message().contains("truck"));
    assert_eq!(err.entity_id(), None);
}

#[test]
fn test_no_vacant_spot_kind() {
    let err: ExError = GarageError::NoVacantSpot {
        garage_id: 1,
        vehicle: VehicleType::Bus,
    }
    .into();

    assert_eq!(err.code(), "ERR_NO_VACANT_SPOT");
    assert_eq!(err.to_string(), "[ERR_NO_VACANT_SPOT]: No vacant spot for a bus in garage 1 (entity_id: 1)");
}
