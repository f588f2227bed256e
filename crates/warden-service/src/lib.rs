//! # warden-service
//!
//! The flows of the Warden system, composed from the ports in
//! `warden-core` and the token machinery in `warden-auth`.
//!
//! ## Modules
//!
//! - `auth` — session lifecycle: register, login, refresh, logout
//! - `account` — self-service: profile, password change, password reset
//! - `access` — administration: role assignment and catalog listing
//! - `seed` — idempotent bootstrap of the catalog and built-in roles

pub mod access;
pub mod account;
pub mod auth;
pub mod seed;

pub use access::AccessService;
pub use account::AccountService;
pub use auth::AuthService;
pub use seed::Seeder;
