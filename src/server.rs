// ABOUTME: HTTP server assembly and shared per-request resources
// ABOUTME: Builds the axum router with CORS, tracing, and timeout layers and runs it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Server assembly
//!
//! [`ServerResources`] is the dependency-injection context handed to every
//! route handler; [`BookingApiServer`] stacks the route groups and the
//! middleware layers and serves them.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::integrations::{
    AgentWebhookClient, ConferenceRoomProvider, PlanGenerator, UnconfiguredPlanGenerator,
    VideoRoomProvider,
};
use crate::routes::{BookingRoutes, HealthRoutes, PlanRoutes, TrainerRoutes, VideoRoutes};

/// Per-request timeout on the whole stack
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared resources injected into every route handler
pub struct ServerResources {
    /// Database connection pool
    pub database: Database,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// Video room capability
    pub video: Arc<dyn VideoRoomProvider>,
    /// Plan-generation capability
    pub plans: Arc<dyn PlanGenerator>,
}

impl ServerResources {
    /// Build resources with providers derived from configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let video: Arc<dyn VideoRoomProvider> =
            Arc::new(ConferenceRoomProvider::new(&config.video));
        let plans: Arc<dyn PlanGenerator> = match AgentWebhookClient::new(&config.plans) {
            Ok(client) => Arc::new(client),
            Err(_) => Arc::new(UnconfiguredPlanGenerator),
        };
        Self {
            database,
            config,
            video,
            plans,
        }
    }

    /// Build resources with explicit providers (tests inject fakes here)
    #[must_use]
    pub fn with_providers(
        database: Database,
        config: Arc<ServerConfig>,
        video: Arc<dyn VideoRoomProvider>,
        plans: Arc<dyn PlanGenerator>,
    ) -> Self {
        Self {
            database,
            config,
            video,
            plans,
        }
    }
}

/// The booking HTTP API server
pub struct BookingApiServer {
    resources: Arc<ServerResources>,
}

impl BookingApiServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full router with middleware layers
    ///
    /// # Errors
    ///
    /// Returns a config error when a CORS origin fails to parse.
    pub fn router(&self) -> AppResult<Router> {
        let cors = build_cors_layer(&self.resources.config)?;

        Ok(Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(TrainerRoutes::routes(self.resources.clone()))
            .merge(BookingRoutes::routes(self.resources.clone()))
            .merge(VideoRoutes::routes(self.resources.clone()))
            .merge(PlanRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(cors))
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails.
    pub async fn run(self) -> AppResult<()> {
        let port = self.resources.config.http_port;
        let router = self.router()?;

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind port {port}: {e}")))?;

        info!("Booking API listening on port {port}");
        axum::serve(listener, router)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))
    }
}

fn build_cors_layer(config: &ServerConfig) -> AppResult<CorsLayer> {
    if config.cors_is_permissive() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let mut origins = Vec::with_capacity(config.cors_allowed_origins.len());
    for origin in &config.cors_allowed_origins {
        origins.push(
            origin
                .parse::<HeaderValue>()
                .map_err(|e| AppError::config(format!("Invalid CORS origin {origin}: {e}")))?,
        );
    }
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
