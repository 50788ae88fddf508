//! Placement rules: spot-type rotation and vehicle/spot compatibility

pub mod compatibility;
pub mod rotation;

pub use compatibility::{check_spot_for_vehicle, compatible_spot_types, is_compatible};
pub use rotation::{plan_row_types, RowPlan, SpotTypeRotation};
