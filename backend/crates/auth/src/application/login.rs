//! Login Use Case
//!
//! Verifies credentials and issues a signed access token.

use std::sync::Arc;

use jsonwebtoken::EncodingKey;
use platform::clock::Clock;
use platform::password::{ClearTextPassword, PasswordHasher};

use crate::application::access_token::AccessTokenClaims;
use crate::application::config::{AuthConfig, TOKEN_TYPE_BEARER};
use crate::domain::repository::UserLookupGateway;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: ClearTextPassword,
}

/// Login output
#[derive(Debug, Clone)]
pub struct LoginOutput {
    /// Compact RS256 JWS
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Seconds until `exp`
    pub expires_in: u64,
}

/// Login use case
pub struct LoginUseCase<G>
where
    G: UserLookupGateway,
{
    gateway: Arc<G>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    signing_key: Arc<EncodingKey>,
    config: Arc<AuthConfig>,
}

impl<G> LoginUseCase<G>
where
    G: UserLookupGateway,
{
    pub fn new(
        gateway: Arc<G>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        signing_key: Arc<EncodingKey>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            gateway,
            hasher,
            clock,
            signing_key,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Validation happens before any store access
        if input.email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if input.password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let user = self.gateway.get_user_by_email(&input.email).await?;

        if !self
            .hasher
            .verify_password(&user.crypted_password, &input.password)
        {
            return Err(AuthError::InvalidPassword);
        }

        let claims = AccessTokenClaims::new(&self.config, user.email, self.clock.now_in_utc());
        let access_token = claims.sign(&self.signing_key)?;

        tracing::info!(email = %claims.sub, "User logged in");

        Ok(LoginOutput {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.expires_in(),
        })
    }
}
