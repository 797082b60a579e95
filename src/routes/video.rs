// ABOUTME: Route handlers for video-call join grants
// ABOUTME: Resolves a session identifier to a booking and issues a room grant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Video join routes
//!
//! The session identifier is the room key. A grant is only issued for a
//! session id that resolves to a persisted booking; the display name
//! defaults to the booking's user name.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::booking_service::BookingService;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters for joining a video room
#[derive(Debug, Deserialize, Default)]
pub struct JoinQuery {
    /// Display name override; defaults to the booking's user name
    pub name: Option<String>,
}

/// Video join routes handler
pub struct VideoRoutes;

impl VideoRoutes {
    /// Create all video routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/video/join/:session_id", get(Self::handle_join))
            .with_state(resources)
    }

    /// Handle GET /api/video/join/:session_id - issue a room grant
    async fn handle_join(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
        Query(query): Query<JoinQuery>,
    ) -> Result<Response, AppError> {
        let booking = BookingService::new(resources.database.clone())
            .get_by_session(&session_id)
            .await?;

        let display_name = query.name.unwrap_or_else(|| booking.user_name.clone());
        let grant = resources.video.join_grant(&booking.session_id, &display_name);

        Ok((StatusCode::OK, Json(grant)).into_response())
    }
}
