//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (upstream client) layer. Services are responsible for:
//!
//! - **Shaping**: Converting validated upstream payloads into site DTOs
//! - **Orchestration**: Coordinating several upstream calls for one response
//! - **Fallback policy**: Deciding when placeholder data replaces a failed upstream call

pub mod character;
pub mod event;
pub mod fallback;
pub mod guild;
pub mod overview;
pub mod raid_log;
pub mod roster;

#[cfg(test)]
mod test;
