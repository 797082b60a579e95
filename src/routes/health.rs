// ABOUTME: Health check routes for liveness and database connectivity
// ABOUTME: Reports overall status plus a per-dependency breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Health routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::server::ServerResources;

/// Health report returned by `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    /// `connected` or `unreachable`
    pub database: String,
    /// Report timestamp
    pub timestamp: String,
}

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health - liveness plus database connectivity
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        let database_ok = resources.database.ping().await.is_ok();

        let response = HealthResponse {
            status: if database_ok { "healthy" } else { "degraded" }.to_owned(),
            database: if database_ok {
                "connected"
            } else {
                "unreachable"
            }
            .to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        };

        let status = if database_ok {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(response)).into_response()
    }
}
