//! Role assignment and catalog administration flows.

pub mod service;

pub use service::AccessService;
