// ABOUTME: HTTP client for the FitBro booking API
// ABOUTME: Typed wrappers over the REST endpoints used by the CLI booking flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Booking API client
//!
//! Thin typed client over the HTTP surface, used by `fitbro-cli` to drive
//! the booking flow. Server errors come back as `{"message": ...}` and are
//! rehydrated into [`AppError`]s with the matching code.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::booking_service::CreateBookingRequest;
use crate::database::{Booking, Trainer};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::integrations::VideoRoomGrant;

/// Default client-side request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the booking API
pub struct BookingApiClient {
    base_url: String,
    http_client: Client,
}

impl BookingApiClient {
    /// Create a client for the API at `base_url`
    ///
    /// # Errors
    ///
    /// Returns a config error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// GET /api/trainers
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_trainers(&self) -> AppResult<Vec<Trainer>> {
        self.get_json("/api/trainers").await
    }

    /// GET /api/trainers/:id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown trainer.
    pub async fn get_trainer(&self, trainer_id: Uuid) -> AppResult<Trainer> {
        self.get_json(&format!("/api/trainers/{trainer_id}")).await
    }

    /// POST /api/bookings
    ///
    /// # Errors
    ///
    /// Returns the server's validation, not-found, or conflict error.
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> AppResult<Booking> {
        let response = self
            .http_client
            .post(format!("{}/api/bookings", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// GET /api/bookings/session/:session_id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a session id that was never assigned.
    pub async fn get_booking_by_session(&self, session_id: &str) -> AppResult<Booking> {
        self.get_json(&format!("/api/bookings/session/{session_id}"))
            .await
    }

    /// GET /api/bookings/user/:email
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn get_bookings_by_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        self.get_json(&format!("/api/bookings/user/{email}")).await
    }

    /// GET /api/video/join/:session_id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown session id.
    pub async fn video_join_grant(
        &self,
        session_id: &str,
        display_name: &str,
    ) -> AppResult<VideoRoomGrant> {
        let response = self
            .http_client
            .get(format!("{}/api/video/join/{session_id}", self.base_url))
            .query(&[("name", display_name)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /api/plans
    ///
    /// # Errors
    ///
    /// Returns the upstream webhook failure when plan generation fails.
    pub async fn generate_plan(&self, user_input: &str) -> AppResult<Value> {
        let response = self
            .http_client
            .post(format!("{}/api/plans", self.base_url))
            .json(&serde_json::json!({ "user_input": user_input }))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .http_client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        Err(AppError::new(code_for_status(status), message))
    }
}

const fn code_for_status(status: StatusCode) -> ErrorCode {
    match status.as_u16() {
        400 => ErrorCode::InvalidInput,
        404 => ErrorCode::ResourceNotFound,
        409 => ErrorCode::ResourceConflict,
        502 => ErrorCode::ExternalServiceError,
        _ => ErrorCode::InternalError,
    }
}
