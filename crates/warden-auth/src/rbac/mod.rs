//! Role-based access control: the permission catalog and evaluation.

pub mod catalog;
pub mod eval;

pub use catalog::{ADMIN_ALL, permissions_for_role};
pub use eval::{has_all_permissions, has_any_permission, has_permission};
