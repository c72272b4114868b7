//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! service crates:
//! - Error classification mapped to HTTP status codes
//! - The response envelope (`meta` block) carried by every JSON body
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod kind;
}
pub mod envelope;

pub use envelope::{Envelope, Meta};
pub use error::kind::ErrorKind;
