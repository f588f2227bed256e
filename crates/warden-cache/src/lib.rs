//! # warden-cache
//!
//! Cache backends for Warden and the token denylist built on top of
//! them.
//!
//! ## Modules
//!
//! - `provider` — `CacheManager` dispatching to the configured backend
//! - `memory` — in-memory backend (moka) with per-entry TTL
//! - `redis` — Redis backend (connection-manager, reconnecting)
//! - `denylist` — `RevocationStore` implementation keyed by jti

pub mod denylist;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use denylist::TokenDenylist;
pub use provider::CacheManager;
