//! PostgreSQL store implementations.

pub mod permission;
pub mod role;
pub mod user;

pub use permission::PgPermissionStore;
pub use role::PgRoleStore;
pub use user::PgUserStore;
