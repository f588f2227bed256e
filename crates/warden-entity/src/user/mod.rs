//! User domain entity.

pub mod model;

pub use model::User;

/// Normalize an email address to its canonical form: lowercased and
/// trimmed. The normalized email is the natural unique key for a user.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
