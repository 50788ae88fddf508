pub mod engine_command;
pub mod engine_query;
pub mod garage;
pub mod park;
