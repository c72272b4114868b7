//! Credential Store Gateway Traits
//!
//! Interfaces for user persistence. Implementation is in infrastructure layer.
//! Lookup and insert are separate so each use case depends only on the
//! capability it needs.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Lookup of a user by email
#[trait_variant::make(UserLookupGateway: Send)]
pub trait LocalUserLookupGateway {
    /// Fetch the user with exactly this email
    ///
    /// Fails with `AuthError::UserNotFound` when no record matches; any
    /// other store failure is returned as `AuthError::Database`.
    async fn get_user_by_email(&self, email: &str) -> AuthResult<User>;
}

/// Insertion of a new user
#[trait_variant::make(UserInsertGateway: Send)]
pub trait LocalUserInsertGateway {
    /// Persist `user` with a store-assigned creation timestamp
    ///
    /// Fails with `AuthError::UserAlreadyExists` when the email is taken;
    /// any other store failure is returned as `AuthError::Database`.
    async fn insert_user(&self, user: &User) -> AuthResult<()>;
}
