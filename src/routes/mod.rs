// ABOUTME: Route module organization for the FitBro booking API
// ABOUTME: Route definitions organized by domain with thin handlers over service layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Route modules
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Booking creation and lookup routes
pub mod bookings;
/// Health check routes
pub mod health;
/// Plan-generation proxy routes
pub mod plans;
/// Trainer directory routes
pub mod trainers;
/// Video-call join grant routes
pub mod video;

pub use bookings::BookingRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use trainers::TrainerRoutes;
pub use video::VideoRoutes;
