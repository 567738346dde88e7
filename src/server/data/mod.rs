//! Upstream service clients.
//!
//! One client per third-party service. Clients own their authentication (an OAuth token
//! cache or a static API key), build requests and validate responses against the contract
//! types in `server::model`; they never shape data for the site.

pub mod blizzard;
pub mod contract;
pub mod endpoint;
pub mod raid_helper;
pub mod token;
pub mod warcraft_logs;

#[cfg(test)]
mod test;
