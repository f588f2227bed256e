//! # warden-core
//!
//! Core crate for Warden. Contains the port traits the flows depend on,
//! configuration schemas, and the unified error system.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
