//! User Entity
//!
//! A registered account as persisted by the credential store.

use platform::password::HashedPassword;

/// User entity
///
/// The email is the unique key. The creation timestamp lives only in the
/// store and is never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    /// Unique key; compared exactly as the store compares it
    pub email: String,
    /// bcrypt hash, never a plaintext
    pub crypted_password: HashedPassword,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        crypted_password: HashedPassword,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            crypted_password,
        }
    }
}
