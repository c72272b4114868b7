//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use auth::application::config::DEFAULT_PASSWORD_COST;
use sqlx::postgres::PgConnectOptions;

const DEFAULT_SQL_HOST: &str = "127.0.0.1";
const DEFAULT_SQL_PORT: u16 = 5432;
const DEFAULT_SQL_CREDENTIAL: &str = "example";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7070";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database: PgConnectOptions,
    pub max_connections: u32,
    /// PEM file holding the RS256 signing key
    pub rsa_private_key_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub password_cost: u32,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    ///
    /// `DATABASE_URL` wins over the `SQL_*` parts when both are set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database = match lookup("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).context("DATABASE_URL is not valid")?,
            None => {
                let port = match lookup("SQL_PORT") {
                    Some(port) => port.parse().context("SQL_PORT must be a port number")?,
                    None => DEFAULT_SQL_PORT,
                };
                let or_default = |key: &str, default: &str| {
                    lookup(key).unwrap_or_else(|| default.to_string())
                };

                PgConnectOptions::new()
                    .host(&or_default("SQL_HOST", DEFAULT_SQL_HOST))
                    .port(port)
                    .username(&or_default("SQL_USERNAME", DEFAULT_SQL_CREDENTIAL))
                    .password(&or_default("SQL_PASSWORD", DEFAULT_SQL_CREDENTIAL))
                    .database(&or_default("SQL_DATABASE", DEFAULT_SQL_CREDENTIAL))
            }
        };

        let max_connections = match lookup("SQL_MAX_CONNECTIONS") {
            Some(n) => n
                .parse()
                .context("SQL_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let rsa_private_key_path = lookup("RSA_PRIVATE_KEY_PATH")
            .map(PathBuf::from)
            .context("RSA_PRIVATE_KEY_PATH must be set in environment")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let password_cost = match lookup("BCRYPT_COST") {
            Some(cost) => cost.parse().context("BCRYPT_COST must be an integer")?,
            None => DEFAULT_PASSWORD_COST,
        };
        anyhow::ensure!(
            (4..=31).contains(&password_cost),
            "BCRYPT_COST must be between 4 and 31, got {password_cost}"
        );

        Ok(Self {
            database,
            max_connections,
            rsa_private_key_path,
            bind_addr,
            password_cost,
        })
    }
}
