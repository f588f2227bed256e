//! Self-service account flows.

pub mod service;

pub use service::{AccountService, UpdateProfileRequest};
