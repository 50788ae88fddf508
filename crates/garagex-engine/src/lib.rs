//! Garagex Engine - Orchestration layer
//!
//! Coordinates the pure allocation rules in `garagex-core` with the
//! SQLite repository in `garagex-store`. Every public operation runs in a
//! single transaction and owns its start/end log events.

pub mod commands;

pub use commands::garage::{garage_create, garage_get, spot_get};
pub use commands::park::{park_vehicle_in_garage, park_vehicle_in_spot};
