// ABOUTME: Plan-generation capability backed by a remote agent webhook
// ABOUTME: Posts free-text user answers and returns the generated plan document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Plan generation
//!
//! Meal/workout plan generation is delegated to a remote agent. The server
//! only proxies the user's free-text answers so the webhook URL stays out of
//! client code. The plan document is passed through untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::PlanWebhookConfig;
use crate::errors::{AppError, AppResult};

/// Capability interface for generating fitness plans
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generate a plan from the user's free-text answers
    async fn generate(&self, user_input: &str) -> AppResult<Value>;
}

/// Plan generator backed by a remote agent webhook
pub struct AgentWebhookClient {
    webhook_url: String,
    http_client: Client,
}

impl AgentWebhookClient {
    /// Create a client for the configured webhook
    ///
    /// # Errors
    ///
    /// Returns a config error when no webhook URL is configured or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &PlanWebhookConfig) -> AppResult<Self> {
        let webhook_url = config
            .webhook_url
            .clone()
            .ok_or_else(|| AppError::config("PLAN_WEBHOOK_URL is not set"))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            webhook_url,
            http_client,
        })
    }
}

#[async_trait]
impl PlanGenerator for AgentWebhookClient {
    async fn generate(&self, user_input: &str) -> AppResult<Value> {
        debug!("requesting plan from agent webhook");
        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&json!({ "user_input": user_input }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Plan webhook returned {}",
                response.status()
            )));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Placeholder used when no webhook is configured
pub struct UnconfiguredPlanGenerator;

#[async_trait]
impl PlanGenerator for UnconfiguredPlanGenerator {
    async fn generate(&self, _user_input: &str) -> AppResult<Value> {
        Err(AppError::config("Plan generation is not configured"))
    }
}
