//! HTTP request handlers.

pub mod access;
pub mod account;
pub mod auth;
pub mod health;
