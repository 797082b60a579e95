// ABOUTME: Route handlers for the booking REST API
// ABOUTME: Creation with server-assigned session codes, plus session and email lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Booking routes
//!
//! `POST /api/bookings` accepts the booking fields minus `sessionId` and
//! `joinCode`, which are server-assigned. Lookups are keyed by session id or
//! by the booking user's email.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::booking_service::{BookingService, CreateBookingRequest};
use crate::errors::AppError;
use crate::server::ServerResources;

/// Booking routes handler
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/bookings", post(Self::handle_create))
            .route(
                "/api/bookings/session/:session_id",
                get(Self::handle_get_by_session),
            )
            .route("/api/bookings/user/:email", get(Self::handle_list_for_user))
            .with_state(resources)
    }

    fn service(resources: &Arc<ServerResources>) -> BookingService {
        BookingService::new(resources.database.clone())
    }

    /// Handle POST /api/bookings - create a booking
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateBookingRequest>,
    ) -> Result<Response, AppError> {
        let booking = Self::service(&resources).create_booking(&body).await?;
        Ok((StatusCode::CREATED, Json(booking)).into_response())
    }

    /// Handle GET /api/bookings/session/:session_id - fetch by session id
    async fn handle_get_by_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<String>,
    ) -> Result<Response, AppError> {
        let booking = Self::service(&resources).get_by_session(&session_id).await?;
        Ok((StatusCode::OK, Json(booking)).into_response())
    }

    /// Handle GET /api/bookings/user/:email - list bookings for an email
    async fn handle_list_for_user(
        State(resources): State<Arc<ServerResources>>,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        let bookings = Self::service(&resources).list_for_email(&email).await?;
        Ok((StatusCode::OK, Json(bookings)).into_response())
    }
}
