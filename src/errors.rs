// ABOUTME: Unified error handling for the FitBro booking API
// ABOUTME: Provides AppError with standard error codes and HTTP response mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Unified error handling
//!
//! Every fallible operation in the crate returns [`AppResult`]. Handlers
//! propagate [`AppError`] directly; the [`IntoResponse`] impl maps each
//! [`ErrorCode`] to an HTTP status and renders the body as `{"message": ...}`,
//! which is the only error shape the API exposes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request payload failed validation
    InvalidInput,
    /// A required field was missing or empty
    MissingRequiredField,
    /// A field was present but malformed
    InvalidFormat,
    /// Referenced resource does not exist
    ResourceNotFound,
    /// Write conflicted with existing state (e.g. unique key violation)
    ResourceConflict,
    /// An upstream service call failed
    ExternalServiceError,
    /// Storage layer failure
    DatabaseError,
    /// Server configuration problem
    ConfigError,
    /// Catch-all internal failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status this code maps to
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ResourceConflict => StatusCode::CONFLICT,
            Self::ExternalServiceError => StatusCode::BAD_GATEWAY,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Application error with a code and a client-safe message
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable classification
    pub code: ErrorCode,
    /// Human-readable message, safe to return to clients
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Validation failure (HTTP 400)
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing resource (HTTP 404)
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Conflicting write (HTTP 409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceConflict, message)
    }

    /// Storage failure (HTTP 500)
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Upstream service failure (HTTP 502)
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Configuration problem (HTTP 500)
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal failure (HTTP 500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {err}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::external_service(format!("HTTP request failed: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        if status.is_server_error() {
            tracing::error!(code = ?self.code, "request failed: {}", self.message);
        }
        (status, Json(json!({ "message": self.message }))).into_response()
    }
}
