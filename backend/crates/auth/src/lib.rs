//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, credential store gateway traits
//! - `application/` - Register and login use cases, access token claims
//! - `infra/` - PostgreSQL gateway
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with first name, last name, email and password
//! - Login by email + password returning an RS256 JWT access token
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (configurable cost, default 10)
//! - Unknown email and wrong password produce the same response
//! - Store and signing failures are logged but never shown to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserGateway;
pub use presentation::handlers::AuthAppState;
pub use presentation::router::auth_router;

pub use kernel::error::kind::ErrorKind;
