use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: IpAddr,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Whether the built-in game catalog is loaded at startup
    pub seed_catalog: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .context("HOST must be a valid IP address")?,

            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            seed_catalog: parse_bool(
                &env::var("SEED_CATALOG").unwrap_or_else(|_| "true".to_string()),
            )
            .context("SEED_CATALOG must be true or false")?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            seed_catalog: true,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => anyhow::bail!("unrecognized boolean value: {other}"),
    }
}
