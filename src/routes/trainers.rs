// ABOUTME: Route handlers for the trainer directory REST API
// ABOUTME: Read-only listing and lookup of trainer profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Trainer directory routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::database::TrainersManager;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Trainer directory routes handler
pub struct TrainerRoutes;

impl TrainerRoutes {
    /// Create all trainer routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/trainers", get(Self::handle_list))
            .route("/api/trainers/:id", get(Self::handle_get))
            .with_state(resources)
    }

    fn manager(resources: &Arc<ServerResources>) -> TrainersManager {
        TrainersManager::new(resources.database.pool().clone())
    }

    /// Handle GET /api/trainers - list all trainers
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let trainers = Self::manager(&resources).list().await?;
        Ok((StatusCode::OK, Json(trainers)).into_response())
    }

    /// Handle GET /api/trainers/:id - fetch one trainer
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        // An unparseable id cannot resolve to a trainer; report it the same
        // way as an unknown one.
        let trainer_id = Uuid::parse_str(&id)
            .map_err(|_| AppError::not_found(format!("Trainer {id}")))?;

        let trainer = Self::manager(&resources)
            .get(trainer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trainer {id}")))?;

        Ok((StatusCode::OK, Json(trainer)).into_response())
    }
}
