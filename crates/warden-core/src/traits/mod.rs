//! Port traits defined in `warden-core` and implemented by other crates.
//!
//! The flows in `warden-service` only ever see these abstractions; a
//! concrete store can be the Postgres repository, the in-memory test
//! double, or anything else honoring the same contract.

pub mod cache;
pub mod hasher;
pub mod permission_store;
pub mod revocation;
pub mod role_store;
pub mod user_store;

pub use cache::CacheProvider;
pub use hasher::PasswordHasher;
pub use permission_store::PermissionStore;
pub use revocation::RevocationStore;
pub use role_store::RoleStore;
pub use user_store::UserStore;
