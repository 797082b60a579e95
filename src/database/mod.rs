// ABOUTME: Core database management with schema migration for SQLite
// ABOUTME: Owns the connection pool and exposes trainer and booking managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Database layer
//!
//! The schema is created idempotently on connect. The UNIQUE index on
//! `bookings.session_id` is load-bearing: it is the mechanism that
//! guarantees at-most-one booking per session identifier even under
//! concurrent submissions.

/// Booking record storage and status transitions
pub mod bookings;
/// Trainer profile storage
pub mod trainers;

pub use bookings::{Booking, BookingStatus, BookingsManager, NewBookingRecord, TimeSlot};
pub use trainers::{NewTrainer, Trainer, TrainersManager};

use sqlx::SqlitePool;
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the database URL is invalid or malformed
    /// - the connection fails
    /// - `SQLite` file creation fails
    /// - migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!("Database ready at {database_url}");
        Ok(db)
    }

    /// Access the underlying pool for manager construction
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Trainer directory manager
    #[must_use]
    pub fn trainers(&self) -> TrainersManager {
        TrainersManager::new(self.pool.clone())
    }

    /// Booking record store manager
    #[must_use]
    pub fn bookings(&self) -> BookingsManager {
        BookingsManager::new(self.pool.clone())
    }

    /// Check connectivity with a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS trainers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                specialty TEXT NOT NULL,
                experience TEXT NOT NULL,
                bio TEXT NOT NULL,
                image TEXT NOT NULL,
                availability TEXT NOT NULL,
                rating REAL NOT NULL DEFAULT 4.5,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create trainers table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bookings (
                id TEXT PRIMARY KEY,
                trainer_id TEXT NOT NULL REFERENCES trainers(id),
                trainer_name TEXT NOT NULL,
                user_name TEXT NOT NULL,
                user_email TEXT NOT NULL,
                user_phone TEXT NOT NULL,
                date TEXT NOT NULL,
                time_slot TEXT NOT NULL,
                session_id TEXT NOT NULL UNIQUE,
                join_code TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'booked',
                is_one_time_only INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bookings table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bookings_user_email ON bookings(user_email)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create bookings index: {e}")))?;

        Ok(())
    }
}
