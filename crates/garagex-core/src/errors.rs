use crate::model::{SpotType, VehicleType};
use thiserror::Error;

/// Result type alias using GarageError
pub type Result<T> = std::result::Result<T, GarageError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a garage operation can report maps onto exactly one kind.
/// Each kind carries a stable error code used by the CLI, by tests and by
/// anything that needs to branch on the failure programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Store-level failure, including lookups that matched no record and
    /// rows that do not decode
    Database,
    /// A creation dimension was zero
    InvalidArguments,
    /// A negative identifier was supplied
    InvalidId,
    /// Vehicle/spot mismatch, or a failed bus contiguity check
    InvalidSpot,
    /// The spot carries no usable spot type
    InvalidSpotType,
    /// The vehicle type is not recognised
    InvalidVehicleType,
    /// The search for a compatible vacant spot came up empty
    NoVacantSpot,
    /// The target spot is already occupied
    SpotFull,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Database => "ERR_DATABASE",
            ExErrorKind::InvalidArguments => "ERR_INVALID_ARGUMENTS",
            ExErrorKind::InvalidId => "ERR_INVALID_ID",
            ExErrorKind::InvalidSpot => "ERR_INVALID_SPOT",
            ExErrorKind::InvalidSpotType => "ERR_INVALID_SPOT_TYPE",
            ExErrorKind::InvalidVehicleType => "ERR_INVALID_VEHICLE_TYPE",
            ExErrorKind::NoVacantSpot => "ERR_NO_VACANT_SPOT",
            ExErrorKind::SpotFull => "ERR_SPOT_FULL",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification kind for programmatic handling plus enough
/// context (operation, entity id, message) to make log lines useful.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the pure garage rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GarageError {
    /// A garage dimension was zero
    #[error(
        "Garage dimensions must be non-zero: levels={levels}, rows_per_level={rows_per_level}, spots_per_row={spots_per_row}"
    )]
    InvalidDimensions {
        levels: u32,
        rows_per_level: u32,
        spots_per_row: u32,
    },

    /// Negative identifiers never name a stored record
    #[error("Invalid id: {id}")]
    InvalidId { id: i64 },

    #[error("Garage not found: {garage_id}")]
    GarageNotFound { garage_id: i64 },

    #[error("Parking spot not found: {spot_id}")]
    SpotNotFound { spot_id: i64 },

    /// The stored spot type is the "none" sentinel or an unknown code
    #[error("Parking spot {spot_id} has no valid spot type")]
    SpotTypeUnassigned { spot_id: i64 },

    #[error("Parking spot {spot_id} is already occupied")]
    SpotFull { spot_id: i64 },

    #[error("A {vehicle} cannot park in {spot_type} spot {spot_id}")]
    IncompatibleSpot {
        spot_id: i64,
        vehicle: VehicleType,
        spot_type: SpotType,
    },

    /// A bus anchored at this spot would not get a full run of free large spots
    #[error("Parking spot {spot_id} does not anchor {required} contiguous vacant large spots")]
    BusRunUnavailable { spot_id: i64, required: usize },

    #[error("Invalid vehicle type: {value}")]
    InvalidVehicleType { value: String },

    /// A stored occupant code does not decode to a vehicle type
    #[error("Parking spot {spot_id} holds unknown vehicle code {code}")]
    UnknownOccupantCode { spot_id: i64, code: i64 },

    #[error("No vacant spot for a {vehicle} in garage {garage_id}")]
    NoVacantSpot { garage_id: i64, vehicle: VehicleType },
}

/// Conversion from GarageError to ExError
impl From<GarageError> for ExError {
    fn from(err: GarageError) -> Self {
        let message = err.to_string();
        match err {
            GarageError::InvalidDimensions { .. } => {
                ExError::new(ExErrorKind::InvalidArguments).with_message(message)
            }
            GarageError::InvalidId { id } => ExError::new(ExErrorKind::InvalidId)
                .with_entity_id(id)
                .with_message(message),
            GarageError::GarageNotFound { garage_id } => ExError::new(ExErrorKind::Database)
                .with_entity_id(garage_id)
                .with_message(message),
            GarageError::SpotNotFound { spot_id } => ExError::new(ExErrorKind::Database)
                .with_entity_id(spot_id)
                .with_message(message),
            GarageError::SpotTypeUnassigned { spot_id } => {
                ExError::new(ExErrorKind::InvalidSpotType)
                    .with_entity_id(spot_id)
                    .with_message(message)
            }
            GarageError::SpotFull { spot_id } => ExError::new(ExErrorKind::SpotFull)
                .with_entity_id(spot_id)
                .with_message(message),
            GarageError::IncompatibleSpot { spot_id, .. }
            | GarageError::BusRunUnavailable { spot_id, .. } => {
                ExError::new(ExErrorKind::InvalidSpot)
                    .with_entity_id(spot_id)
                    .with_message(message)
            }
            GarageError::InvalidVehicleType { .. } => {
                ExError::new(ExErrorKind::InvalidVehicleType).with_message(message)
            }
            GarageError::UnknownOccupantCode { spot_id, .. } => {
                ExError::new(ExErrorKind::Database)
                    .with_entity_id(spot_id)
                    .with_message(message)
            }
            GarageError::NoVacantSpot { garage_id, .. } => {
                ExError::new(ExErrorKind::NoVacantSpot)
                    .with_entity_id(garage_id)
                    .with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Database, "ERR_DATABASE"),
            (ExErrorKind::InvalidArguments, "ERR_INVALID_ARGUMENTS"),
            (ExErrorKind::InvalidId, "ERR_INVALID_ID"),
            (ExErrorKind::InvalidSpot, "ERR_INVALID_SPOT"),
            (ExErrorKind::InvalidSpotType, "ERR_INVALID_SPOT_TYPE"),
            (ExErrorKind::InvalidVehicleType, "ERR_INVALID_VEHICLE_TYPE"),
            (ExErrorKind::NoVacantSpot, "ERR_NO_VACANT_SPOT"),
            (ExErrorKind::SpotFull, "ERR_SPOT_FULL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_not_found_surfaces_as_database() {
        let err: ExError = GarageError::SpotNotFound { spot_id: 42 }.into();
        assert_eq!(err.kind(), ExErrorKind::Database);
        assert_eq!(err.entity_id(), Some("42"));
    }

    #[test]
    fn test_corrupt_occupant_surfaces_as_database() {
        let err: ExError = GarageError::UnknownOccupantCode {
            spot_id: 6,
            code: 777,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::Database);
        assert_eq!(err.entity_id(), Some("6"));
    }

    #[test]
    fn test_bus_run_maps_to_invalid_spot() {
        let err: ExError = GarageError::BusRunUnavailable {
            spot_id: 7,
            required: 5,
        }
        .into();
        assert_eq!(err.code(), "ERR_INVALID_SPOT");
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::SpotFull)
            .with_op("park_vehicle_in_spot")
            .with_entity_id(3)
            .with_message("taken");
        assert_eq!(
            err.to_string(),
            "[ERR_SPOT_FULL] in operation 'park_vehicle_in_spot': taken (entity_id: 3)"
        );
    }
}
