//! Upstream payload fixtures.
//!
//! This module contains functions that build JSON payloads shaped like the responses of the
//! upstream services. Fixtures only build values; register them on a
//! [`TestBuilder`](crate::builder::TestBuilder) to have the mock server return them.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let roster = fixture::blizzard::roster(&[
//!     fixture::blizzard::roster_member("Thrall", 60, 7, 2, 0),
//!     fixture::blizzard::roster_member("Jaina", 60, 8, 1, 1),
//! ]);
//! ```

pub mod blizzard;
pub mod raid_helper;
pub mod warcraft_logs;
