//! Site-facing data transfer objects.
//!
//! These are the JSON shapes the guild website consumes. Server code builds them from
//! upstream payloads in the service layer; nothing here knows about the upstream APIs.

pub mod api;
pub mod character;
pub mod event;
pub mod guild;
pub mod member;
pub mod overview;
pub mod raid;
