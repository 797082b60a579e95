// ABOUTME: Helper module organization for integration tests
// ABOUTME: Exposes the axum request helper used to drive routers in-process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

/// In-process axum request/response helper
pub mod axum_test;
