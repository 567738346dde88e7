//! Server-side upstream models and request targets.
//!
//! This module contains the contract types upstream payloads are validated against, the
//! numeric id lookup tables for each service, and the guild/character targets controllers
//! resolve from query parameters. Contract types are converted to site DTOs in the service
//! layer.

pub mod blizzard;
pub mod lookup;
pub mod raid_helper;
pub mod target;
pub mod warcraft_logs;
