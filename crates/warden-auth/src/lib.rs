//! # warden-auth
//!
//! Token lifecycle and permission resolution for Warden.
//!
//! ## Modules
//!
//! - `token` — signed, expiring claim sets (issue, decode, TTL sizing)
//! - `password` — Argon2id hashing and the password policy
//! - `rbac` — the static permission catalog and pure evaluation functions
//! - `guard` — request-side authentication + permission enforcement

pub mod guard;
pub mod password;
pub mod rbac;
pub mod token;

pub use guard::AccessGuard;
pub use password::{Argon2Hasher, PasswordPolicy};
pub use token::{Claims, TokenCodec, TokenKind, TokenPair};
