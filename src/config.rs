//! Configuration for the Kolegium content API
//!
//! CLI arguments and environment variable handling using clap.
//! Environment variables are read once at startup; nothing re-reads them
//! per request.

use clap::Parser;
use std::net::SocketAddr;

/// Kolegium content API - backend for dynamic site content
/// (events, publications, blog posts, commissions, centers, members, contact)
#[derive(Parser, Debug, Clone)]
#[command(name = "kolegium-api")]
#[command(about = "REST API for Kolegium Dermatologi, Venereologi & Estetika content")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", default_value = "mongodb://localhost:27017")]
    pub database_url: String,

    /// MongoDB database name
    #[arg(long, env = "DATABASE_NAME", default_value = "kolegium")]
    pub database_name: String,

    /// Fail startup when the database is unreachable, instead of serving
    /// with storage reported unavailable
    #[arg(long, env = "REQUIRE_DATABASE", default_value = "false")]
    pub require_database: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database_name.trim().is_empty() {
            return Err("DATABASE_NAME must not be empty".to_string());
        }
        Ok(())
    }
}
