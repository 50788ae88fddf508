//! Built-in allocation scenarios
//!
//! Each scenario starts from an empty schema. Results are printed as
//! `name: PASSED` or `name: FAILED (reason)`; any failure makes the command
//! fail so the process exits non-zero.

use super::{CommandResult, Session};
use garagex_core::errors::{ExError, ExErrorKind};
use garagex_core::model::{GarageDimensions, GarageInfo, VehicleType};
use garagex_engine::{garage_create, garage_get, park_vehicle_in_garage, spot_get};
use garagex_store::migrations::reset_schema;

type ScenarioResult = Result<(), String>;

const SCENARIOS: &[(&str, fn(&mut Session) -> ScenarioResult)] = &[
    ("create_garage", create_garage),
    ("park_motorcycle", park_motorcycle),
    ("park_car", park_car),
    ("park_bus", park_bus),
    ("parking_spot_info", parking_spot_info),
];

pub fn execute(session: &mut Session) -> CommandResult {
    let mut failed = 0;
    for (name, scenario) in SCENARIOS {
        let outcome = reset_schema(&mut session.conn)
            .map_err(|e| e.to_string())
            .and_then(|()| scenario(session));
        match outcome {
            Ok(()) => println!("{}: PASSED", name),
            Err(reason) => {
                failed += 1;
                println!("{}: FAILED ({})", name, reason);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} self-check scenarios failed", failed, SCENARIOS.len()).into());
    }
    Ok(())
}

fn ensure(condition: bool, what: &str) -> ScenarioResult {
    if condition {
        Ok(())
    } else {
        Err(what.to_string())
    }
}

fn expect_kind<T>(result: Result<T, ExError>, kind: ExErrorKind, what: &str) -> ScenarioResult {
    match result {
        Err(e) if e.kind() == kind => Ok(()),
        Err(e) => Err(format!("{}: expected {}, got {}", what, kind.code(), e)),
        Ok(_) => Err(format!("{}: expected {}, got success", what, kind.code())),
    }
}

fn create(session: &mut Session, levels: u32, rows: u32, spots: u32) -> Result<GarageInfo, String> {
    garage_create(
        &mut session.conn,
        GarageDimensions::new(levels, rows, spots),
        &mut session.rng,
    )
    .map_err(|e| e.to_string())
}

fn park(session: &mut Session, vehicle: VehicleType, garage_id: i64) -> Result<i64, String> {
    park_vehicle_in_garage(&mut session.conn, vehicle, garage_id).map_err(|e| e.to_string())
}

fn filled_count(session: &Session, garage_id: i64) -> Result<usize, String> {
    garage_get(&session.conn, garage_id)
        .map(|info| info.filled_spot_ids.len())
        .map_err(|e| e.to_string())
}

fn create_garage(session: &mut Session) -> ScenarioResult {
    let info = create(session, 1, 2, 3)?;
    ensure(
        (info.levels, info.rows_per_level, info.spots_per_row) == (1, 2, 3),
        "dimensions not echoed back",
    )?;
    ensure(info.vacant_spot_ids.len() == 6, "expected 6 vacant spots")?;

    for (levels, rows, spots) in [(0, 2, 3), (1, 0, 3), (1, 2, 0)] {
        expect_kind(
            garage_create(
                &mut session.conn,
                GarageDimensions::new(levels, rows, spots),
                &mut session.rng,
            ),
            ExErrorKind::InvalidArguments,
            "zero dimension",
        )?;
    }
    Ok(())
}

fn park_motorcycle(session: &mut Session) -> ScenarioResult {
    let info = create(session, 1, 3, 1)?;
    for _ in 0..3 {
        park(session, VehicleType::Motorcycle, info.id)?;
    }
    expect_kind(
        park_vehicle_in_garage(&mut session.conn, VehicleType::Motorcycle, info.id),
        ExErrorKind::NoVacantSpot,
        "fourth motorcycle",
    )?;
    ensure(filled_count(session, info.id)? == 3, "expected 3 filled spots")
}

fn park_car(session: &mut Session) -> ScenarioResult {
    let info = create(session, 1, 3, 1)?;
    for _ in 0..2 {
        park(session, VehicleType::Car, info.id)?;
    }
    expect_kind(
        park_vehicle_in_garage(&mut session.conn, VehicleType::Car, info.id),
        ExErrorKind::NoVacantSpot,
        "third car",
    )?;
    ensure(filled_count(session, info.id)? == 2, "expected 2 filled spots")
}

fn park_bus(session: &mut Session) -> ScenarioResult {
    let info = create(session, 1, 3, 9)?;
    park(session, VehicleType::Bus, info.id)?;
    expect_kind(
        park_vehicle_in_garage(&mut session.conn, VehicleType::Bus, info.id),
        ExErrorKind::NoVacantSpot,
        "second bus",
    )?;
    ensure(filled_count(session, info.id)? == 5, "expected 5 filled spots")
}

fn parking_spot_info(session: &mut Session) -> ScenarioResult {
    let info = create(session, 2, 3, 5)?;

    park(session, VehicleType::Bus, info.id)?;
    let second_bus = park(session, VehicleType::Bus, info.id)?;
    let spot = spot_get(&session.conn, second_bus).map_err(|e| e.to_string())?;
    ensure(spot.level == 1, "second bus should park on level 1")?;

    for _ in 0..5 {
        park(session, VehicleType::Car, info.id)?;
    }
    for _ in 0..5 {
        park(session, VehicleType::Motorcycle, info.id)?;
    }
    let sixth = park(session, VehicleType::Motorcycle, info.id)?;
    let spot = spot_get(&session.conn, sixth).map_err(|e| e.to_string())?;
    ensure(spot.level == 1, "sixth motorcycle should park on level 1")?;

    ensure(
        filled_count(session, info.id)? == 21,
        "expected 21 filled spots",
    )
}
