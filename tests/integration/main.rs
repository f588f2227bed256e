//! Integration tests for the Warden HTTP API.
//!
//! Every test runs against the full router with in-memory stores, so
//! the suite needs no external services.

mod helpers;

mod access_test;
mod account_test;
mod auth_test;
