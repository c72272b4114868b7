//! Infrastructure Layer
//!
//! Database implementations of the credential store gateway.

pub mod postgres;

pub use postgres::PgUserGateway;
