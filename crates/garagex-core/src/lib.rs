//! Garagex Core - garage domain model and allocation rules
//!
//! Provides:
//! - Garage and parking spot model with persisted numeric codes
//! - Canonical error facility (`ExError`) and typed domain errors
//! - Structured logging facility and boundary logging macros
//! - Pure allocation logic: spot-type rotation, vehicle/spot compatibility,
//!   first-fit selection and the contiguous-run scan used for buses
//!
//! Nothing in this crate touches storage; `garagex-store` maps rows into
//! these types and `garagex-engine` wires the two together.

pub mod allocation;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GarageError, Result};
pub use model::{
    Garage, GarageDimensions, GarageInfo, ParkingSpot, SpotLocation, SpotType, VehicleType,
};
