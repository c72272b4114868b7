//! Domain Layer
//!
//! Contains the user entity and the credential store gateway traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::user::User;
pub use repository::{UserInsertGateway, UserLookupGateway};
