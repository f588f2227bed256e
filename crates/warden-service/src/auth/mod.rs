//! Session lifecycle flows.

pub mod service;

pub use service::AuthService;
