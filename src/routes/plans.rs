// ABOUTME: Route handlers proxying plan generation to the remote agent webhook
// ABOUTME: Keeps the webhook endpoint server-side and passes the plan through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Plan-generation routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::server::ServerResources;

/// Request body for plan generation
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Free-text answers collected by the planner form
    pub user_input: String,
}

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans", post(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle POST /api/plans - generate a plan via the agent webhook
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GeneratePlanRequest>,
    ) -> Result<Response, AppError> {
        if body.user_input.trim().is_empty() {
            return Err(AppError::invalid_input("user_input is required"));
        }

        let plan = resources.plans.generate(&body.user_input).await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
