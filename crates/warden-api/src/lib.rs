//! # warden-api
//!
//! HTTP API layer for Warden built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, login rate
//! limiting, CORS), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
