// ABOUTME: Main library entry point for the FitBro booking platform
// ABOUTME: Provides the booking-session lifecycle API, flow client, and integrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

#![deny(unsafe_code)]

//! # FitBro Booking Server
//!
//! Backend for the FitBro trainer-booking flow: trainer selection, slot
//! booking, unique session/join-code issuance, and hand-off to the
//! video-call join step.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Session codes**: collision-resistant session id and join code generation
//! - **Database**: trainer directory and booking record store (`SQLite`)
//! - **Booking service**: validation and atomic session-unique creation
//! - **Routes**: thin axum handlers over the service layer
//! - **Flow**: the client-side booking state machine driven by `fitbro-cli`
//! - **Integrations**: capability seams for video, identity, and plan generation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbro_booking_server::config::ServerConfig;
//! use fitbro_booking_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Booking API configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Booking validation and session-unique creation
pub mod booking_service;

/// Typed HTTP client for the booking API
pub mod client;

/// Configuration management
pub mod config;

/// Trainer and booking storage
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Client-side booking flow state machine
pub mod flow;

/// Capability interfaces for third-party collaborators
pub mod integrations;

/// `HTTP` routes for trainers, bookings, video join, plans, and health
pub mod routes;

/// Server assembly and shared resources
pub mod server;

/// Session identifier and join code generation
pub mod session_codes;
