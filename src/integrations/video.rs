// ABOUTME: Video room provider capability for the video-call join step
// ABOUTME: Builds join grants from a session identifier and display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Video room provider
//!
//! The booking core hands exactly two values across the video boundary: the
//! session identifier (used as the room key) and the user's display name.
//! Token minting and media transport belong to the external SDK.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::VideoConfig;

/// Everything a client needs to join a video room
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRoomGrant {
    /// Application identifier for the video SDK, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Room key; always the booking's session identifier
    pub room_id: String,
    /// Ephemeral participant identifier
    pub user_id: String,
    /// Display name shown to other participants
    pub user_name: String,
}

/// Capability interface for producing video room join grants
pub trait VideoRoomProvider: Send + Sync {
    /// Build a join grant for the given room key and display name
    fn join_grant(&self, session_id: &str, display_name: &str) -> VideoRoomGrant;
}

/// Provider backed by an environment-configured conference SDK account
pub struct ConferenceRoomProvider {
    app_id: Option<String>,
}

impl ConferenceRoomProvider {
    /// Create a provider from video configuration
    #[must_use]
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            app_id: config.app_id.clone(),
        }
    }
}

impl VideoRoomProvider for ConferenceRoomProvider {
    fn join_grant(&self, session_id: &str, display_name: &str) -> VideoRoomGrant {
        VideoRoomGrant {
            app_id: self.app_id.clone(),
            room_id: session_id.to_owned(),
            user_id: Uuid::new_v4().to_string(),
            user_name: display_name.to_owned(),
        }
    }
}
