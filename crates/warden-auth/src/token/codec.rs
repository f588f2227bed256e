//! Token creation and validation with configurable signing and TTLs.
//!
//! The codec is stateless and purely cryptographic: it never consults
//! the revocation store. Revocation is a separate, I/O-bound check
//! composed by callers, which keeps the codec free of storage
//! dependencies.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use warden_core::config::AuthConfig;
use warden_core::error::AppError;
use warden_core::result::AppResult;

use super::claims::{Claims, TokenKind};

/// Creates and validates signed access and refresh tokens.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Access token TTL in seconds.
    access_ttl_seconds: u64,
    /// Refresh token TTL in seconds.
    refresh_ttl_seconds: u64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

/// Result of a successful token pair issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token one second past expiry must fail decode.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_ttl_seconds: config.access_ttl_minutes * 60,
            refresh_ttl_seconds: config.refresh_ttl_days * 24 * 60 * 60,
        }
    }

    /// Issues a single signed token of the given kind.
    ///
    /// The jti is freshly generated per token, so revoking one token
    /// can never affect another.
    pub fn issue(
        &self,
        kind: TokenKind,
        user_id: Uuid,
        email: &str,
        permissions: &[String],
    ) -> AppResult<(String, Claims)> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            permissions: permissions.to_vec(),
            exp: now.timestamp() + self.expiry_seconds(kind) as i64,
            iat: now.timestamp(),
            jti: Uuid::new_v4(),
            kind,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode {kind} token: {e}")))?;

        Ok((token, claims))
    }

    /// Issues a new access + refresh token pair embedding the given
    /// permission snapshot.
    pub fn issue_pair(
        &self,
        user_id: Uuid,
        email: &str,
        permissions: &[String],
    ) -> AppResult<TokenPair> {
        let (access_token, access_claims) =
            self.issue(TokenKind::Access, user_id, email, permissions)?;
        let (refresh_token, refresh_claims) =
            self.issue(TokenKind::Refresh, user_id, email, permissions)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at: DateTime::from_timestamp(access_claims.exp, 0)
                .unwrap_or_else(Utc::now),
            refresh_expires_at: DateTime::from_timestamp(refresh_claims.exp, 0)
                .unwrap_or_else(Utc::now),
        })
    }

    /// Verifies signature and expiry, returning the claim set.
    ///
    /// Fails with `InvalidToken` on a bad signature, a structurally
    /// incomplete payload, or an expired token. Never consults the
    /// revocation store.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_token("Invalid token format")
                    }
                    _ => AppError::invalid_token(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Configured TTL in seconds for the given token kind.
    ///
    /// Callers size revocation-entry TTLs from this so a denylist entry
    /// never outlives its subject token.
    pub fn expiry_seconds(&self, kind: TokenKind) -> u64 {
        match kind {
            TokenKind::Access => self.access_ttl_seconds,
            TokenKind::Refresh => self.refresh_ttl_seconds,
        }
    }
}
