//! Spot-type rotation for new garages
//!
//! Every row holds spots of a single type. Row types are drawn from a
//! three-element pool without replacement; the pool refills once empty and
//! is restarted at the start of each level, so any three consecutive rows of
//! a level starting at a multiple of three cover all three types.

use rand::Rng;

use crate::model::{GarageDimensions, SpotType};

/// Draws spot types without replacement from a refilling pool
#[derive(Debug, Clone, Default)]
pub struct SpotTypeRotation {
    pool: Vec<SpotType>,
}

impl SpotTypeRotation {
    pub fn new() -> Self {
        Self {
            pool: Vec::with_capacity(SpotType::ALL.len()),
        }
    }

    /// Draw the next spot type, refilling the pool first if it is empty
    pub fn next_type<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SpotType {
        if self.pool.is_empty() {
            self.pool.extend_from_slice(&SpotType::ALL);
        }
        let index = rng.gen_range(0..self.pool.len());
        self.pool.swap_remove(index)
    }

    /// Number of types left before the next refill
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

/// The spot type chosen for one row of a garage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlan {
    pub level: u32,
    pub row: u32,
    pub spot_type: SpotType,
}

/// Assign a spot type to every `(level, row)` pair, in level-major order
pub fn plan_row_types<R: Rng + ?Sized>(dims: &GarageDimensions, rng: &mut R) -> Vec<RowPlan> {
    let capacity = dims.levels as usize * dims.rows_per_level as usize;
    let mut plan = Vec::with_capacity(capacity);
    for level in 0..dims.levels {
        let mut rotation = SpotTypeRotation::new();
        for row in 0..dims.rows_per_level {
            plan.push(RowPlan {
                level,
                row,
                spot_type: rotation.next_type(rng),
            });
        }
    }
    plan
}
