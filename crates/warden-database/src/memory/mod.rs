//! In-memory store implementations.
//!
//! These honor the same port contracts as the PostgreSQL stores,
//! including case-insensitive email and name uniqueness, and back the
//! test suites and local development without a running database.

pub mod permission;
pub mod role;
pub mod user;

pub use permission::InMemoryPermissionStore;
pub use role::InMemoryRoleStore;
pub use user::InMemoryUserStore;
