//! Password strength policy.

use warden_core::config::AuthConfig;
use warden_core::error::AppError;
use warden_core::result::AppResult;

/// Enforces minimum credential strength before hashing.
///
/// The policy is checked on registration and password changes, never on
/// login: an existing password that predates a policy tightening must
/// keep working.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Creates a policy with an explicit minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validates a candidate password, counting characters rather than
    /// bytes so multibyte passwords are not over-counted.
    pub fn check(&self, candidate: &str) -> AppResult<()> {
        if candidate.chars().count() < self.min_length {
            return Err(AppError::weak_credential(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::ErrorKind;

    #[test]
    fn test_minimum_length_enforced() {
        let policy = PasswordPolicy::with_min_length(8);
        assert!(policy.check("longpass1").is_ok());
        assert!(policy.check("12345678").is_ok());

        let err = policy.check("short").unwrap_err();
        assert_eq!(err.kind, ErrorKind::WeakCredential);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let policy = PasswordPolicy::with_min_length(8);
        // Eight multibyte characters: 16 bytes, 8 chars.
        assert!(policy.check("αααααααα").is_ok());
        assert!(policy.check("ααααααα").is_err());
    }
}
