//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt with a caller-supplied cost factor)
//! - Wall-clock access behind a trait so time can be fixed in tests
//! - Loading RSA signing keys for JWT issuance

pub mod clock;
pub mod password;
pub mod signing;
