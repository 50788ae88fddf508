//! Engine-level read queries.

#![allow(clippy::result_large_err)]

use garagex_core::model::{GarageInfo, ParkingSpot};
use garagex_store::errors::Result;
use rusqlite::Connection;
use serde::Serialize;

/// Read-only queries against the garage store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineQuery {
    GarageGet { garage_id: i64 },
    SpotGet { spot_id: i64 },
}

/// Result of an engine query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EngineQueryResult {
    Garage(GarageInfo),
    Spot(ParkingSpot),
}

/// Apply an engine query.
pub fn apply_engine_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::GarageGet { garage_id } => {
            crate::commands::garage::garage_get(conn, garage_id).map(EngineQueryResult::Garage)
        }
        EngineQuery::SpotGet { spot_id } => {
            crate::commands::garage::spot_get(conn, spot_id).map(EngineQueryResult::Spot)
        }
    }
}
