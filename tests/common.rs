// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, router, and trainer seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

//! Shared test utilities for `fitbro_booking_server`
//!
//! Each test gets its own temp-file-backed `SQLite` database so pooled
//! connections always see the same schema.

use std::env;
use std::sync::{Arc, Once};

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;

use fitbro_booking_server::{
    config::ServerConfig,
    database::{Database, NewTrainer, Trainer},
    errors::AppResult,
    integrations::{ConferenceRoomProvider, PlanGenerator},
    server::{BookingApiServer, ServerResources},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A fully wired test server plus the temp dir its database lives in
pub struct TestServer {
    pub resources: Arc<ServerResources>,
    pub router: Router,
    _db_dir: TempDir,
}

/// Plan generator fake returning a canned document
pub struct StaticPlanGenerator(pub Value);

#[async_trait]
impl PlanGenerator for StaticPlanGenerator {
    async fn generate(&self, _user_input: &str) -> AppResult<Value> {
        Ok(self.0.clone())
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<(Database, TempDir)> {
    init_test_logging();
    let dir = TempDir::new()?;
    let database_url = format!("sqlite:{}/test.db", dir.path().display());
    let database = Database::new(&database_url).await?;
    Ok((database, dir))
}

/// Standard test server with default video provider and a canned plan
pub async fn setup_test_server() -> Result<TestServer> {
    let (database, db_dir) = create_test_database().await?;
    let config = Arc::new(ServerConfig::default());

    let video = Arc::new(ConferenceRoomProvider::new(&config.video));
    let plans = Arc::new(StaticPlanGenerator(json!({
        "response": "Sample 4-week plan"
    })));

    let resources = Arc::new(ServerResources::with_providers(
        database, config, video, plans,
    ));
    let router = BookingApiServer::new(resources.clone()).router()?;

    Ok(TestServer {
        resources,
        router,
        _db_dir: db_dir,
    })
}

/// Seed the two stock trainer profiles, returning them in insertion order
pub async fn seed_test_trainers(database: &Database) -> Result<Vec<Trainer>> {
    let manager = database.trainers();
    let mut seeded = Vec::new();
    for profile in stock_profiles() {
        seeded.push(manager.create(&profile).await?);
    }
    Ok(seeded)
}

fn stock_profiles() -> Vec<NewTrainer> {
    vec![
        NewTrainer {
            name: "John Smith".to_owned(),
            specialty: "Strength & Conditioning".to_owned(),
            experience: "8 years".to_owned(),
            bio: "Certified strength and conditioning specialist.".to_owned(),
            image: "https://randomuser.me/api/portraits/men/32.jpg".to_owned(),
            availability: vec![
                "Monday".to_owned(),
                "Wednesday".to_owned(),
                "Friday".to_owned(),
            ],
            rating: 4.8,
        },
        NewTrainer {
            name: "Sarah Johnson".to_owned(),
            specialty: "Yoga & Flexibility".to_owned(),
            experience: "10 years".to_owned(),
            bio: "500-hour certified yoga instructor.".to_owned(),
            image: "https://randomuser.me/api/portraits/women/44.jpg".to_owned(),
            availability: vec![
                "Tuesday".to_owned(),
                "Thursday".to_owned(),
                "Saturday".to_owned(),
            ],
            rating: 4.9,
        },
    ]
}

/// A valid booking payload for the given trainer id
pub fn valid_booking_body(trainer_id: &str) -> Value {
    json!({
        "trainerId": trainer_id,
        "userName": "Jane Doe",
        "userEmail": "jane@example.com",
        "userPhone": "5551234567",
        "date": "2025-06-01",
        "timeSlot": "10:00 AM"
    })
}
