//! Schema reset command

use super::{CommandResult, Session};
use garagex_store::migrations::reset_schema;

pub fn execute(session: &mut Session) -> CommandResult {
    reset_schema(&mut session.conn)?;
    println!("Garage schema reset");
    Ok(())
}
