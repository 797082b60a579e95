// ABOUTME: Main binary for the FitBro booking API server
// ABOUTME: Loads environment configuration, connects the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! # FitBro Booking Server
//!
//! ```bash
//! # Run with defaults (port 5000, sqlite:./data/fitbro.db)
//! cargo run --bin fitbro-booking-server
//!
//! # Override via environment
//! HTTP_PORT=8080 DATABASE_URL=sqlite:./fitbro.db cargo run --bin fitbro-booking-server
//! ```

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fitbro_booking_server::{
    config::ServerConfig, database::Database, server::BookingApiServer, server::ServerResources,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(ServerConfig::from_env()?);
    info!(
        port = config.http_port,
        database = %config.database_url,
        "starting FitBro booking server"
    );

    let database = Database::new(&config.database_url).await?;
    let resources = Arc::new(ServerResources::new(database, config));

    BookingApiServer::new(resources).run().await?;
    Ok(())
}
