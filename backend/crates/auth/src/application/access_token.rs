//! Access Token
//!
//! RS256-signed JWT handed out on a successful login. The key is loaded once
//! at startup; only signing happens here.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Registered claims carried by an access token
///
/// All times are whole seconds since the Unix epoch. `aud` is serialized
/// as a single-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: Vec<String>,
    /// The user's email
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl AccessTokenClaims {
    /// Claims for `subject` issued at `now`
    ///
    /// Sub-second precision is dropped, so `nbf == iat` and
    /// `exp == iat + ttl` hold exactly.
    pub fn new(config: &AuthConfig, subject: impl Into<String>, now: DateTime<Utc>) -> Self {
        let issued_at = now.timestamp();
        let ttl = i64::try_from(config.access_token_ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            iss: config.token_issuer.clone(),
            aud: vec![config.token_issuer.clone()],
            sub: subject.into(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at.saturating_add(ttl),
        }
    }

    /// Sign as a compact JWS with RS256
    pub fn sign(&self, key: &EncodingKey) -> AuthResult<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), self, key)
            .map_err(AuthError::InvalidPrivateKey)
    }
}
