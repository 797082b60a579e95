// ABOUTME: Configuration module organization for the FitBro booking server
// ABOUTME: Exposes environment-backed configuration with a load-once lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Configuration management

/// Environment-variable-backed configuration
pub mod environment;

pub use environment::{PlanWebhookConfig, ServerConfig, VideoConfig};
