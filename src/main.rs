//! Kolegium content API server

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kolegium_api::{
    config::Args,
    db::{Gateway, MongoStore},
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kolegium_api={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("==============================================");
    info!("  Kolegium Dermatologi, Venereologi & Estetika");
    info!("  Content API");
    info!("==============================================");
    info!("Listen: {}", args.listen);
    info!("MongoDB: {}", args.database_url);
    info!("Database: {}", args.database_name);
    info!("==============================================");

    // Connect to MongoDB; a failed connection degrades the gateway rather
    // than the process unless REQUIRE_DATABASE is set
    let gateway = match MongoStore::connect(&args.database_url, &args.database_name).await {
        Ok(store) => {
            info!("MongoDB connected successfully");
            Gateway::new(Arc::new(store))
        }
        Err(e) => {
            if args.require_database {
                error!("MongoDB connection failed: {}", e);
                std::process::exit(1);
            }
            warn!("MongoDB connection failed, serving degraded: {}", e);
            Gateway::degraded()
        }
    };

    let state = Arc::new(AppState::new(args, gateway));

    // Run the server
    if let Err(e) = server::run(state).await {
        error!("Server error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
