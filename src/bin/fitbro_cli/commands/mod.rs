// ABOUTME: Command module organization for fitbro-cli
// ABOUTME: Booking-flow and trainer-directory subcommand handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

/// Booking flow, lookup, join, and plan commands
pub mod bookings;
/// Trainer directory commands
pub mod trainers;
