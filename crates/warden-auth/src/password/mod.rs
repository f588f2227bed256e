//! Password hashing and strength policy.

pub mod hasher;
pub mod policy;

pub use hasher::Argon2Hasher;
pub use policy::PasswordPolicy;
