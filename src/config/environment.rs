// ABOUTME: Environment-only server configuration with load-once lifecycle
// ABOUTME: Reads ports, database URL, CORS origins, and integration secrets from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Server configuration
//!
//! All configuration comes from environment variables read once at process
//! start. Secrets (video SDK credentials, plan webhook URL) are never given
//! defaults; when absent, the corresponding integration is disabled.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port, matching the original deployment
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default database location for local development
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/fitbro.db";

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP API binds to
    pub http_port: u16,
    /// Database connection string (`sqlite:` URLs)
    pub database_url: String,
    /// Allowed CORS origins; `*` means permissive
    pub cors_allowed_origins: Vec<String>,
    /// Video-call SDK settings
    pub video: VideoConfig,
    /// Plan-generation webhook settings
    pub plans: PlanWebhookConfig,
}

/// Video-call SDK credentials, supplied via environment
#[derive(Debug, Clone, Default)]
pub struct VideoConfig {
    /// Application identifier issued by the video SDK vendor
    pub app_id: Option<String>,
    /// Server secret paired with the app id; never logged
    pub server_secret: Option<String>,
}

/// Remote plan-generation agent webhook settings
#[derive(Debug, Clone)]
pub struct PlanWebhookConfig {
    /// Webhook endpoint; plan generation is disabled when unset
    pub webhook_url: Option<String>,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PlanWebhookConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if a numeric variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                AppError::config(format!("HTTP_PORT must be a port number: {e}"))
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_owned())
            .split(',')
            .map(|origin| origin.trim().to_owned())
            .filter(|origin| !origin.is_empty())
            .collect();

        let video = VideoConfig {
            app_id: env::var("VIDEO_APP_ID").ok(),
            server_secret: env::var("VIDEO_SERVER_SECRET").ok(),
        };

        let timeout_secs = match env::var("PLAN_WEBHOOK_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                AppError::config(format!("PLAN_WEBHOOK_TIMEOUT_SECS must be an integer: {e}"))
            })?,
            Err(_) => PlanWebhookConfig::default().timeout_secs,
        };
        let plans = PlanWebhookConfig {
            webhook_url: env::var("PLAN_WEBHOOK_URL").ok(),
            timeout_secs,
        };

        Ok(Self {
            http_port,
            database_url,
            cors_allowed_origins,
            video,
            plans,
        })
    }

    /// Whether CORS should allow any origin
    #[must_use]
    pub fn cors_is_permissive(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            cors_allowed_origins: vec!["*".to_owned()],
            video: VideoConfig::default(),
            plans: PlanWebhookConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_permissive() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 5000);
        assert!(config.cors_is_permissive());
        assert!(config.video.app_id.is_none());
        assert!(config.plans.webhook_url.is_none());
    }

    #[test]
    fn explicit_origins_are_not_permissive() {
        let config = ServerConfig {
            cors_allowed_origins: vec!["https://fitbro.app".to_owned()],
            ..ServerConfig::default()
        };
        assert!(!config.cors_is_permissive());
    }
}
