//! Password Hashing and Verification
//!
//! One-way password handling with:
//! - bcrypt hashing (salted, modular crypt format `$2b$<cost>$...`)
//! - Caller-supplied cost factor; no default is imposed here
//! - Zeroization of clear text passwords on drop
//! - Verification that never errors: mismatches and malformed hashes are `false`
//! - Passwords longer than [`MAX_PASSWORD_BYTES`] are refused, never truncated
//!
//! ## Security Features
//! - The work factor is encoded in each hash, so raising the cost only
//!   affects newly created hashes
//! - bcrypt compares digests in constant time
//! - Debug output of both password types is redacted

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Longest input bcrypt digests in full; later bytes would be ignored
pub const MAX_PASSWORD_BYTES: usize = 72;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed (e.g. cost outside 4..=31)
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),

    /// Password is longer than bcrypt can digest
    #[error("Password is {0} bytes, at most 72 are supported")]
    TooLong(usize),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No policy is applied on construction: the caller decides which inputs
/// are acceptable.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes of the UTF-8 encoding
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<String> for ClearTextPassword {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ClearTextPassword {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in bcrypt modular crypt format
///
/// Only obtainable from [`PasswordHasher::hash_password`] or from a value
/// already persisted by the store, so a plaintext can never end up here.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash read back from storage
    ///
    /// The value is not parsed; a malformed hash simply never verifies.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher capability
// ============================================================================

/// Password hashing capability
///
/// Injected into use cases as a trait object; implementations hold no
/// mutable state and are shared across concurrent requests.
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way hash of `password` with work factor `cost`
    fn hash_password(
        &self,
        password: &ClearTextPassword,
        cost: u32,
    ) -> Result<HashedPassword, PasswordHashError>;

    /// Check `password` against a stored hash
    ///
    /// Returns `false` on mismatch, on malformed hashes and on passwords
    /// that could never have been hashed.
    fn verify_password(&self, hash: &HashedPassword, password: &ClearTextPassword) -> bool;
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordHasher;

impl PasswordHasher for BcryptPasswordHasher {
    fn hash_password(
        &self,
        password: &ClearTextPassword,
        cost: u32,
    ) -> Result<HashedPassword, PasswordHashError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordHashError::TooLong(password.len()));
        }

        let hash = bcrypt::hash(password.as_bytes(), cost)?;
        Ok(HashedPassword { hash })
    }

    fn verify_password(&self, hash: &HashedPassword, password: &ClearTextPassword) -> bool {
        // bcrypt would compare only the first 72 bytes
        if password.len() > MAX_PASSWORD_BYTES {
            return false;
        }

        bcrypt::verify(password.as_bytes(), hash.as_str()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt accepts; keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("verysecure");
        let hashed = hasher.hash_password(&password, TEST_COST).unwrap();

        // Correct password should verify
        assert!(hasher.verify_password(&hashed, &password));

        // Wrong password should not verify
        let wrong_password = ClearTextPassword::from("verysecure!");
        assert!(!hasher.verify_password(&hashed, &wrong_password));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("secret");

        let first = hasher.hash_password(&password, TEST_COST).unwrap();
        let second = hasher.hash_password(&password, TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password(&first, &password));
        assert!(hasher.verify_password(&second, &password));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("plaintext-marker");
        let hashed = hasher.hash_password(&password, TEST_COST).unwrap();

        assert!(!hashed.as_str().contains("plaintext-marker"));
        assert!(hashed.as_str().starts_with("$2b$04$"));
    }

    #[test]
    fn test_cost_is_encoded_in_hash() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("secret");
        let hashed = hasher.hash_password(&password, 5).unwrap();

        assert!(hashed.as_str().starts_with("$2b$05$"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("secret");

        let result = hasher.hash_password(&password, 3);
        assert!(matches!(result, Err(PasswordHashError::HashingFailed(_))));

        let result = hasher.hash_password(&password, 32);
        assert!(matches!(result, Err(PasswordHashError::HashingFailed(_))));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("secret");

        assert!(!hasher.verify_password(&HashedPassword::from_stored(""), &password));
        assert!(!hasher.verify_password(
            &HashedPassword::from_stored("not_a_valid_hash"),
            &password
        ));
        assert!(!hasher.verify_password(&HashedPassword::from_stored("secret"), &password));
    }

    #[test]
    fn test_stored_hash_roundtrip() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::from("secret");
        let hashed = hasher.hash_password(&password, TEST_COST).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_str().to_string());
        assert!(hasher.verify_password(&restored, &password));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::from("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = HashedPassword::from_stored("$2b$04$abcdefghijklmnopqrstuv");
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains("abcdefghij"));
    }

    #[test]
    fn test_password_at_length_limit() {
        let hasher = BcryptPasswordHasher;
        let longest = ClearTextPassword::new("a".repeat(MAX_PASSWORD_BYTES));
        let hashed = hasher.hash_password(&longest, TEST_COST).unwrap();

        assert!(hasher.verify_password(&hashed, &longest));

        let mut shorter = "a".repeat(MAX_PASSWORD_BYTES - 1);
        shorter.push('b');
        assert!(!hasher.verify_password(&hashed, &ClearTextPassword::new(shorter)));
    }

    #[test]
    fn test_overlong_password_is_refused() {
        let hasher = BcryptPasswordHasher;
        let password = ClearTextPassword::new(format!("{}X", "a".repeat(MAX_PASSWORD_BYTES)));

        let result = hasher.hash_password(&password, TEST_COST);
        assert!(matches!(result, Err(PasswordHashError::TooLong(73))));
    }

    #[test]
    fn test_overlong_passwords_sharing_a_prefix_do_not_verify() {
        let hasher = BcryptPasswordHasher;
        let prefix = "a".repeat(MAX_PASSWORD_BYTES);
        // Hash of the shared 72-byte prefix, as a truncating hasher would store it
        let hashed = hasher
            .hash_password(&ClearTextPassword::new(prefix.clone()), TEST_COST)
            .unwrap();

        let first = ClearTextPassword::new(format!("{prefix}X"));
        let second = ClearTextPassword::new(format!("{prefix}Y"));
        assert!(!hasher.verify_password(&hashed, &first));
        assert!(!hasher.verify_password(&hashed, &second));
    }

    #[test]
    fn test_multibyte_length_counts_bytes() {
        // 25 three-byte characters = 75 bytes
        let password = ClearTextPassword::new("あ".repeat(25));
        assert_eq!(password.len(), 75);
        assert!(matches!(
            BcryptPasswordHasher.hash_password(&password, TEST_COST),
            Err(PasswordHashError::TooLong(75))
        ));
    }

    #[test]
    fn test_empty_password() {
        assert!(ClearTextPassword::from("").is_empty());
        assert!(!ClearTextPassword::from(" ").is_empty());
    }
}
