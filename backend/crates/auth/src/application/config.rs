//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// bcrypt work factor used when none is configured
pub const DEFAULT_PASSWORD_COST: u32 = 10;

/// Issuer and audience of every access token
pub const TOKEN_ISSUER: &str = "littlerollingsushi.com";

/// Lifetime of an access token
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Token type reported to the client
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// bcrypt cost for newly registered passwords (4..=31)
    pub password_cost: u32,
    /// `iss` and `aud` claim of issued tokens
    pub token_issuer: String,
    /// Distance between `iat` and `exp`
    pub access_token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_cost: DEFAULT_PASSWORD_COST,
            token_issuer: TOKEN_ISSUER.to_string(),
            access_token_ttl: ACCESS_TOKEN_TTL,
        }
    }
}

impl AuthConfig {
    /// Override the bcrypt cost, keeping the token settings
    pub fn with_password_cost(cost: u32) -> Self {
        Self {
            password_cost: cost,
            ..Default::default()
        }
    }

    /// `expires_in` reported to the client, in seconds
    pub fn expires_in(&self) -> u64 {
        self.access_token_ttl.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.password_cost, 10);
        assert_eq!(config.token_issuer, "littlerollingsushi.com");
        assert_eq!(config.expires_in(), 3600);
    }

    #[test]
    fn test_with_password_cost() {
        let config = AuthConfig::with_password_cost(4);
        assert_eq!(config.password_cost, 4);
        assert_eq!(config.token_issuer, TOKEN_ISSUER);
        assert_eq!(config.access_token_ttl, ACCESS_TOKEN_TTL);
    }
}
