//! Park commands

use super::{print_json, CommandResult, Session};
use clap::Args;
use garagex_core::errors::ExError;
use garagex_core::model::VehicleType;
use garagex_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};

#[derive(Debug, Args)]
pub struct ParkArgs {
    /// motorcycle, car or bus (or the numeric code 201-203)
    pub vehicle: String,
    #[arg(allow_negative_numbers = true)]
    pub garage_id: i64,
}

#[derive(Debug, Args)]
pub struct ParkSpotArgs {
    /// motorcycle, car or bus (or the numeric code 201-203)
    pub vehicle: String,
    /// For a bus, the first of the five spots
    #[arg(allow_negative_numbers = true)]
    pub spot_id: i64,
}

fn parse_vehicle(raw: &str) -> Result<VehicleType, ExError> {
    raw.parse::<VehicleType>().map_err(ExError::from)
}

pub fn execute_park(session: &mut Session, args: ParkArgs) -> CommandResult {
    let vehicle = parse_vehicle(&args.vehicle)?;
    let cmd = EngineCommand::ParkVehicleInGarage {
        vehicle,
        garage_id: args.garage_id,
    };
    let result = apply_engine_command(cmd, &mut session.conn, &mut session.rng)?;

    if session.json {
        return print_json(&result);
    }
    if let EngineCommandResult::ParkedInGarage { spot_id } = result {
        println!("Parked {} in spot {}", vehicle, spot_id);
    }
    Ok(())
}

pub fn execute_park_spot(session: &mut Session, args: ParkSpotArgs) -> CommandResult {
    let vehicle = parse_vehicle(&args.vehicle)?;
    let cmd = EngineCommand::ParkVehicleInSpot {
        vehicle,
        spot_id: args.spot_id,
    };
    let result = apply_engine_command(cmd, &mut session.conn, &mut session.rng)?;

    if session.json {
        return print_json(&result);
    }
    if let EngineCommandResult::ParkedInSpot { spot_ids } = result {
        let ids: Vec<String> = spot_ids.iter().map(i64::to_string).collect();
        println!("Parked {} in spots {}", vehicle, ids.join(", "));
    }
    Ok(())
}
