//! Garage and spot commands

use super::{print_json, CommandResult, Session};
use clap::Args;
use garagex_core::model::{GarageDimensions, ParkingSpot};
use garagex_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use garagex_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

#[derive(Debug, Args)]
pub struct CreateArgs {
    pub levels: u32,
    pub rows_per_level: u32,
    pub spots_per_row: u32,
}

#[derive(Debug, Args)]
pub struct GarageArgs {
    #[arg(allow_negative_numbers = true)]
    pub garage_id: i64,
}

#[derive(Debug, Args)]
pub struct SpotArgs {
    #[arg(allow_negative_numbers = true)]
    pub spot_id: i64,
}

pub fn execute_create(session: &mut Session, args: CreateArgs) -> CommandResult {
    let cmd = EngineCommand::CreateGarage {
        dims: GarageDimensions::new(args.levels, args.rows_per_level, args.spots_per_row),
    };
    let result = apply_engine_command(cmd, &mut session.conn, &mut session.rng)?;

    if session.json {
        return print_json(&result);
    }
    if let EngineCommandResult::GarageCreated(info) = result {
        println!("{}", info);
    }
    Ok(())
}

pub fn execute_garage(session: &Session, args: GarageArgs) -> CommandResult {
    let result = apply_engine_query(
        EngineQuery::GarageGet {
            garage_id: args.garage_id,
        },
        &session.conn,
    )?;

    if session.json {
        return print_json(&result);
    }
    if let EngineQueryResult::Garage(info) = result {
        println!("{}", info);
    }
    Ok(())
}

pub fn execute_spot(session: &Session, args: SpotArgs) -> CommandResult {
    let result = apply_engine_query(
        EngineQuery::SpotGet {
            spot_id: args.spot_id,
        },
        &session.conn,
    )?;

    if session.json {
        return print_json(&result);
    }
    if let EngineQueryResult::Spot(spot) = result {
        print_spot(&spot);
    }
    Ok(())
}

fn print_spot(spot: &ParkingSpot) {
    println!("Parking Spot Info:");
    println!("\tid: {}", spot.id);
    println!("\tgarage: {}", spot.garage_id);
    println!("\tlevel: {}", spot.level);
    println!("\trow: {}", spot.row);
    println!("\tspot: {}", spot.spot_num);
    match spot.spot_type {
        Some(spot_type) => println!("\ttype: {}", spot_type),
        None => println!("\ttype: none"),
    }
    match spot.occupant {
        Some(vehicle) => println!("\toccupant: {}", vehicle),
        None => println!("\toccupant: vacant"),
    }
}
