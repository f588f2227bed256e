//! # warden-entity
//!
//! Domain entity models for Warden: users, roles, and permissions.
//!
//! This crate has **no** internal dependencies on other Warden crates.

pub mod permission;
pub mod role;
pub mod user;

pub use permission::Permission;
pub use role::Role;
pub use user::User;
