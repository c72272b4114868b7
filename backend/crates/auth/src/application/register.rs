//! Register Use Case
//!
//! Hashes the password and stores a new user.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordHasher};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserInsertGateway;
use crate::error::AuthResult;

/// Register input
///
/// Fields are taken as submitted; no emptiness or format checks are made.
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: ClearTextPassword,
}

/// Register use case
pub struct RegisterUseCase<G>
where
    G: UserInsertGateway,
{
    gateway: Arc<G>,
    hasher: Arc<dyn PasswordHasher>,
    config: Arc<AuthConfig>,
}

impl<G> RegisterUseCase<G>
where
    G: UserInsertGateway,
{
    pub fn new(gateway: Arc<G>, hasher: Arc<dyn PasswordHasher>, config: Arc<AuthConfig>) -> Self {
        Self {
            gateway,
            hasher,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        // Hash before touching the store; a hashing failure performs no insert
        let crypted_password = self
            .hasher
            .hash_password(&input.password, self.config.password_cost)?;

        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            crypted_password,
        );

        self.gateway.insert_user(&user).await?;

        tracing::info!(email = %user.email, "User registered");

        Ok(())
    }
}
