//! Core types shared across Garagex facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by tests that assert on captured log events.

pub mod schema;
