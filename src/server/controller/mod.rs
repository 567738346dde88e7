//! HTTP request handlers.
//!
//! Controllers validate query parameters, resolve guild and character targets, call the
//! matching service and wrap the result in a JSON response. Missing or malformed parameters
//! are rejected with 400 before any upstream call is made.

pub mod blizzard;
pub mod overview;
pub mod param;
pub mod raid_helper;
pub mod warcraft_logs;
