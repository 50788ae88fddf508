use serde::{Deserialize, Serialize};

use crate::errors::GarageError;

/// Capability class of a parking spot
///
/// Persisted as integers starting at 100; `100` itself is the "no type"
/// sentinel and never decodes to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    Motorcycle,
    Compact,
    Large,
}

impl SpotType {
    /// Persisted code meaning "no spot type assigned"
    pub const NONE_CODE: i64 = 100;

    pub const ALL: [SpotType; 3] = [SpotType::Motorcycle, SpotType::Compact, SpotType::Large];

    pub fn code(self) -> i64 {
        match self {
            SpotType::Motorcycle => 101,
            SpotType::Compact => 102,
            SpotType::Large => 103,
        }
    }

    /// Decode a persisted code; the sentinel and unknown codes yield `None`
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            101 => Some(SpotType::Motorcycle),
            102 => Some(SpotType::Compact),
            103 => Some(SpotType::Large),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpotType::Motorcycle => "motorcycle",
            SpotType::Compact => "compact",
            SpotType::Large => "large",
        }
    }
}

impl std::fmt::Display for SpotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of vehicle asking for a spot
///
/// Persisted as integers starting at 200; `200` is the "no vehicle" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Motorcycle,
    Car,
    Bus,
}

impl VehicleType {
    /// Persisted code meaning "no vehicle"
    pub const NONE_CODE: i64 = 200;

    pub fn code(self) -> i64 {
        match self {
            VehicleType::Motorcycle => 201,
            VehicleType::Car => 202,
            VehicleType::Bus => 203,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            201 => Some(VehicleType::Motorcycle),
            202 => Some(VehicleType::Car),
            203 => Some(VehicleType::Bus),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Car => "car",
            VehicleType::Bus => "bus",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a vehicle name (`car`) or its persisted code (`202`)
impl std::str::FromStr for VehicleType {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "motorcycle" => Some(VehicleType::Motorcycle),
            "car" => Some(VehicleType::Car),
            "bus" => Some(VehicleType::Bus),
            other => other.parse::<i64>().ok().and_then(VehicleType::from_code),
        };
        parsed.ok_or_else(|| GarageError::InvalidVehicleType {
            value: trimmed.to_string(),
        })
    }
}

/// A persisted parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: i64,
    pub garage_id: i64,
    /// 0-based level index
    pub level: u32,
    /// 0-based row index within the level
    pub row: u32,
    /// 0-based position within the row
    pub spot_num: u32,
    /// `None` when the stored code is the sentinel or unrecognised
    pub spot_type: Option<SpotType>,
    pub occupant: Option<VehicleType>,
}

impl ParkingSpot {
    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn location(&self) -> SpotLocation {
        SpotLocation {
            id: self.id,
            level: self.level,
            row: self.row,
            spot_num: self.spot_num,
        }
    }
}

/// Identity and position of a spot, as returned by vacancy scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotLocation {
    pub id: i64,
    pub level: u32,
    pub row: u32,
    pub spot_num: u32,
}

impl SpotLocation {
    /// True when `self` sits `offset` places after `anchor` in the same row
    pub fn continues(&self, anchor: &SpotLocation, offset: usize) -> bool {
        self.level == anchor.level
            && self.row == anchor.row
            && u64::from(anchor.spot_num) + offset as u64 == u64::from(self.spot_num)
    }

    /// Sort key for first-fit ordering
    pub fn position(&self) -> (u32, u32, u32) {
        (self.level, self.row, self.spot_num)
    }
}
