//! # warden-database
//!
//! PostgreSQL connection management and the concrete store
//! implementations for Warden entities. Also provides in-memory store
//! implementations used by tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
