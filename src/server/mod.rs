//! Server-side API backend.
//!
//! This module contains the complete backend for the guild site: HTTP endpoints, the
//! orchestration of upstream calls, the upstream clients themselves and the supporting
//! infrastructure. The backend uses Axum as the web framework, reqwest for outgoing HTTP and
//! the oauth2 crate for client-credentials token exchange.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, query validation and DTO responses
//! - **Service Layer** (`service/`) - Orchestration, roster enrichment and fallback policy
//! - **Data Layer** (`data/`) - Upstream API clients, token caching and payload contracts
//! - **Model Layer** (`model/`) - Upstream payload shapes, lookup tables and request targets
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Slugs, icon URLs and item level tiers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (upstream clients, config)
//! - **Startup** (`startup`) - HTTP client construction and startup diagnostics
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** validates query parameters and resolves the guild/character target
//! 3. **Service** calls one or more upstream clients and shapes the result
//! 4. **Data** obtains a bearer token if needed, issues the request and validates the payload
//! 5. **Controller** returns the DTO as JSON, or the error as an `ErrorDto`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
