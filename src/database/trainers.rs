// ABOUTME: Database operations for trainer profiles
// ABOUTME: Read-only directory of trainers plus seeding support for external creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Trainer directory
//!
//! Trainers are created and seeded externally (see the `seed-trainers`
//! binary); the booking flow only lists and resolves them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A trainer profile as exposed by the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Area of expertise, e.g. "Strength & Conditioning"
    pub specialty: String,
    /// Years of experience as free text, e.g. "8 years"
    pub experience: String,
    /// Short biography
    pub bio: String,
    /// Portrait image URL
    pub image: String,
    /// Weekday names the trainer is available on
    pub availability: Vec<String>,
    /// Average rating
    pub rating: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A trainer profile to seed, before the store assigns an id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrainer {
    /// Display name
    pub name: String,
    /// Area of expertise
    pub specialty: String,
    /// Years of experience as free text
    pub experience: String,
    /// Short biography
    pub bio: String,
    /// Portrait image URL
    pub image: String,
    /// Weekday names the trainer is available on
    pub availability: Vec<String>,
    /// Average rating
    #[serde(default = "default_rating")]
    pub rating: f64,
}

const fn default_rating() -> f64 {
    4.5
}

/// Trainer database operations manager
pub struct TrainersManager {
    pool: SqlitePool,
}

impl TrainersManager {
    /// Create a new trainers manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all trainers in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Trainer>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, specialty, experience, bio, image, availability,
                   rating, created_at, updated_at
            FROM trainers
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list trainers: {e}")))?;

        rows.iter().map(row_to_trainer).collect()
    }

    /// Get a trainer by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, trainer_id: Uuid) -> AppResult<Option<Trainer>> {
        let row = sqlx::query(
            r"
            SELECT id, name, specialty, experience, bio, image, availability,
                   rating, created_at, updated_at
            FROM trainers
            WHERE id = $1
            ",
        )
        .bind(trainer_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get trainer: {e}")))?;

        row.map(|r| row_to_trainer(&r)).transpose()
    }

    /// Get a trainer by display name (used by the seeder to upsert)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Trainer>> {
        let row = sqlx::query(
            r"
            SELECT id, name, specialty, experience, bio, image, availability,
                   rating, created_at, updated_at
            FROM trainers
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get trainer by name: {e}")))?;

        row.map(|r| row_to_trainer(&r)).transpose()
    }

    /// Insert a trainer profile
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, profile: &NewTrainer) -> AppResult<Trainer> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let availability_json = serde_json::to_string(&profile.availability)?;

        sqlx::query(
            r"
            INSERT INTO trainers (
                id, name, specialty, experience, bio, image, availability,
                rating, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            ",
        )
        .bind(id.to_string())
        .bind(&profile.name)
        .bind(&profile.specialty)
        .bind(&profile.experience)
        .bind(&profile.bio)
        .bind(&profile.image)
        .bind(&availability_json)
        .bind(profile.rating)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create trainer: {e}")))?;

        Ok(Trainer {
            id,
            name: profile.name.clone(),
            specialty: profile.specialty.clone(),
            experience: profile.experience.clone(),
            bio: profile.bio.clone(),
            image: profile.image.clone(),
            availability: profile.availability.clone(),
            rating: profile.rating,
            created_at: now,
            updated_at: now,
        })
    }
}

fn row_to_trainer(row: &SqliteRow) -> AppResult<Trainer> {
    let id_str: String = row.get("id");
    let availability_json: String = row.get("availability");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::internal(format!("Invalid trainer UUID: {e}")))?;
    let availability: Vec<String> = serde_json::from_str(&availability_json)
        .map_err(|e| AppError::internal(format!("Invalid JSON in availability: {e}")))?;
    let created_at = parse_timestamp(&created_at_str)?;
    let updated_at = parse_timestamp(&updated_at_str)?;

    Ok(Trainer {
        id,
        name: row.get("name"),
        specialty: row.get("specialty"),
        experience: row.get("experience"),
        bio: row.get("bio"),
        image: row.get("image"),
        availability,
        rating: row.get("rating"),
        created_at,
        updated_at,
    })
}

pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))
}
