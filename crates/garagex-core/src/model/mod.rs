pub mod garage;
pub mod spot;

pub use garage::{Garage, GarageDimensions, GarageInfo};
pub use spot::{ParkingSpot, SpotLocation, SpotType, VehicleType};
