use serde::{Deserialize, Serialize};

use crate::errors::{GarageError, Result};

/// Requested shape of a new garage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageDimensions {
    pub levels: u32,
    pub rows_per_level: u32,
    pub spots_per_row: u32,
}

impl GarageDimensions {
    pub fn new(levels: u32, rows_per_level: u32, spots_per_row: u32) -> Self {
        Self {
            levels,
            rows_per_level,
            spots_per_row,
        }
    }

    /// Reject any zero dimension
    ///
    /// # Errors
    /// * `InvalidDimensions` - If levels, rows per level or spots per row is zero
    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 || self.rows_per_level == 0 || self.spots_per_row == 0 {
            return Err(GarageError::InvalidDimensions {
                levels: self.levels,
                rows_per_level: self.rows_per_level,
                spots_per_row: self.spots_per_row,
            });
        }
        Ok(())
    }

    /// Total number of spots a garage of this shape holds
    pub fn spot_count(&self) -> u64 {
        u64::from(self.levels) * u64::from(self.rows_per_level) * u64::from(self.spots_per_row)
    }
}

/// A persisted garage record
///
/// Immutable once created; occupancy lives on the spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garage {
    pub id: i64,
    pub levels: u32,
    pub rows_per_level: u32,
    pub spots_per_row: u32,
}

/// Dimensions plus current vacancy of a garage
///
/// Both id lists are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageInfo {
    pub id: i64,
    pub levels: u32,
    pub rows_per_level: u32,
    pub spots_per_row: u32,
    pub vacant_spot_ids: Vec<i64>,
    pub filled_spot_ids: Vec<i64>,
}

impl GarageInfo {
    pub fn from_parts(garage: Garage, vacant_spot_ids: Vec<i64>, filled_spot_ids: Vec<i64>) -> Self {
        Self {
            id: garage.id,
            levels: garage.levels,
            rows_per_level: garage.rows_per_level,
            spots_per_row: garage.spots_per_row,
            vacant_spot_ids,
            filled_spot_ids,
        }
    }

    pub fn total_spots(&self) -> usize {
        self.vacant_spot_ids.len() + self.filled_spot_ids.len()
    }
}

impl std::fmt::Display for GarageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Garage Info:")?;
        writeln!(f, "\tid: {}", self.id)?;
        writeln!(
            f,
            "\tdimensions: {} levels x {} rows x {} spots",
            self.levels, self.rows_per_level, self.spots_per_row
        )?;
        writeln!(f, "\tnum vacant: {}", self.vacant_spot_ids.len())?;
        write!(f, "\tnum filled: {}", self.filled_spot_ids.len())
    }
}
