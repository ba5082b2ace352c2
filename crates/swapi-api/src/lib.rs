//! HTTP API server for the SWAPI people service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /`** -- service name, description, and version
//! - **`GET /api/people?page=N`** -- ten people per page, each joined with
//!   its starships, vehicles, homeworld, species, and films, plus the total
//!   person count
//!
//! # Architecture
//!
//! Handlers read from an immutable [`Dataset`] held in [`AppState`] and
//! never take locks. Errors propagate to [`ApiError`]'s response
//! conversion, which logs them and sets the status. All responses allow
//! any origin and are pretty-printed unless configured otherwise.
//!
//! [`Dataset`]: swapi_data::Dataset

pub mod error;
pub mod handlers;
pub mod json;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use json::{ApiJson, JsonStyle};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, bind, serve, shutdown_signal, start_server};
pub use state::AppState;
