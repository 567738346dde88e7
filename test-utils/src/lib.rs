//! Guildsite Test Utils
//!
//! Provides shared testing utilities for the guildsite backend. The crate runs an in-process
//! mock of the upstream services (Blizzard, WarcraftLogs, Raid-Helper) so clients can be
//! exercised against real HTTP without leaving the machine.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring canned upstream responses
//! - **TestContext**: Running mock server with request recording and token counters
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Upstream JSON payload builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn fetches_guild() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_json(
//!             "/data/wow/guild/pyrewood-village/nose-beers",
//!             fixture::blizzard::guild("Nose Beers", "Pyrewood Village"),
//!         )
//!         .build()
//!         .await?;
//!
//!     let url = test.url("/data/wow/guild/pyrewood-village/nose-beers");
//!     // Point a client at `test.base_url` and `test.token_url()`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
