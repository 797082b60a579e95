// ABOUTME: Database operations for booking records keyed by unique session identifiers
// ABOUTME: Handles atomic booking inserts, session lookups, and status transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Booking record store
//!
//! Each booking creation is a single atomic insert; the UNIQUE constraint on
//! `session_id` is the only concurrency-correctness mechanism. A second
//! writer with the same session id is rejected by the store and surfaced as
//! a conflict so the service layer can regenerate and retry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::database::trainers::parse_timestamp;
use crate::errors::{AppError, AppResult};
use crate::session_codes::SessionCodes;

/// Booking lifecycle status
///
/// Transitions are monotonic: `Pending -> Booked`, `Booked -> Completed`,
/// `Booked -> Cancelled`. Anything else is rejected by
/// [`BookingsManager::update_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation
    Pending,
    /// Confirmed; the default for new bookings
    #[default]
    Booked,
    /// Session took place
    Completed,
    /// Called off before the session
    Cancelled,
}

impl BookingStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Booked => "booked",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Booked,
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Booked)
                | (Self::Booked, Self::Completed | Self::Cancelled)
        )
    }
}

/// The fixed set of bookable time slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 9:00 AM
    #[serde(rename = "9:00 AM")]
    NineAm,
    /// 10:00 AM
    #[serde(rename = "10:00 AM")]
    TenAm,
    /// 11:00 AM
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    /// 1:00 PM
    #[serde(rename = "1:00 PM")]
    OnePm,
    /// 2:00 PM
    #[serde(rename = "2:00 PM")]
    TwoPm,
    /// 3:00 PM
    #[serde(rename = "3:00 PM")]
    ThreePm,
    /// 4:00 PM
    #[serde(rename = "4:00 PM")]
    FourPm,
    /// 5:00 PM
    #[serde(rename = "5:00 PM")]
    FivePm,
}

impl TimeSlot {
    /// Every bookable slot, in chronological order
    pub const ALL: [Self; 8] = [
        Self::NineAm,
        Self::TenAm,
        Self::ElevenAm,
        Self::OnePm,
        Self::TwoPm,
        Self::ThreePm,
        Self::FourPm,
        Self::FivePm,
    ];

    /// AM/PM label as shown to users and stored in the database
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NineAm => "9:00 AM",
            Self::TenAm => "10:00 AM",
            Self::ElevenAm => "11:00 AM",
            Self::OnePm => "1:00 PM",
            Self::TwoPm => "2:00 PM",
            Self::ThreePm => "3:00 PM",
            Self::FourPm => "4:00 PM",
            Self::FivePm => "5:00 PM",
        }
    }

    /// Parse a slot label; `None` for anything outside the fixed set
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == s)
    }
}

/// A persisted booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique record identifier
    pub id: Uuid,
    /// Trainer the session is booked with
    pub trainer_id: Uuid,
    /// Trainer name snapshot taken at booking time
    pub trainer_name: String,
    /// Client name
    pub user_name: String,
    /// Client email
    pub user_email: String,
    /// Client phone as entered
    pub user_phone: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Chosen time slot
    pub time_slot: TimeSlot,
    /// Globally unique session identifier; room key for the video call
    pub session_id: String,
    /// 6-digit join code paired with the session identifier
    pub join_code: String,
    /// Lifecycle status
    pub status: BookingStatus,
    /// Whether the booking is consumed after a single session
    pub is_one_time_only: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Validated booking fields ready for insertion
///
/// Produced by the booking service after validation; the store itself does
/// not re-validate.
#[derive(Debug, Clone)]
pub struct NewBookingRecord {
    /// Trainer the session is booked with
    pub trainer_id: Uuid,
    /// Trainer name snapshot
    pub trainer_name: String,
    /// Client name
    pub user_name: String,
    /// Client email
    pub user_email: String,
    /// Client phone as entered
    pub user_phone: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Chosen time slot
    pub time_slot: TimeSlot,
}

/// Booking database operations manager
pub struct BookingsManager {
    pool: SqlitePool,
}

impl BookingsManager {
    /// Create a new bookings manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a booking with the given session codes
    ///
    /// The insert is atomic with respect to session-id uniqueness: when the
    /// UNIQUE constraint on `session_id` rejects the write, a conflict error
    /// is returned and the caller regenerates the codes.
    ///
    /// # Errors
    ///
    /// Returns a conflict error on a session-id collision, or a database
    /// error for any other storage failure.
    pub async fn insert(
        &self,
        record: &NewBookingRecord,
        codes: &SessionCodes,
    ) -> AppResult<Booking> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let status = BookingStatus::default();

        sqlx::query(
            r"
            INSERT INTO bookings (
                id, trainer_id, trainer_name, user_name, user_email, user_phone,
                date, time_slot, session_id, join_code, status, is_one_time_only,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            ",
        )
        .bind(id.to_string())
        .bind(record.trainer_id.to_string())
        .bind(&record.trainer_name)
        .bind(&record.user_name)
        .bind(&record.user_email)
        .bind(&record.user_phone)
        .bind(record.date.to_string())
        .bind(record.time_slot.as_str())
        .bind(&codes.session_id)
        .bind(&codes.join_code)
        .bind(status.as_str())
        .bind(1i64) // is_one_time_only
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                AppError::conflict("Session identifier already in use")
            } else {
                AppError::database(format!("Failed to create booking: {e}"))
            }
        })?;

        Ok(Booking {
            id,
            trainer_id: record.trainer_id,
            trainer_name: record.trainer_name.clone(),
            user_name: record.user_name.clone(),
            user_email: record.user_email.clone(),
            user_phone: record.user_phone.clone(),
            date: record.date,
            time_slot: record.time_slot,
            session_id: codes.session_id.clone(),
            join_code: codes.join_code.clone(),
            status,
            is_one_time_only: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a booking by its session identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_by_session(&self, session_id: &str) -> AppResult<Option<Booking>> {
        let row = sqlx::query(
            r"
            SELECT id, trainer_id, trainer_name, user_name, user_email, user_phone,
                   date, time_slot, session_id, join_code, status, is_one_time_only,
                   created_at, updated_at
            FROM bookings
            WHERE session_id = $1
            ",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get booking: {e}")))?;

        row.map(|r| row_to_booking(&r)).transpose()
    }

    /// List bookings for a user email, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_for_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query(
            r"
            SELECT id, trainer_id, trainer_name, user_name, user_email, user_phone,
                   date, time_slot, session_id, join_code, status, is_one_time_only,
                   created_at, updated_at
            FROM bookings
            WHERE user_email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list bookings: {e}")))?;

        rows.iter().map(row_to_booking).collect()
    }

    /// Apply a status transition to the booking with the given session id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown session id, `InvalidInput` when the
    /// lifecycle does not allow the transition, or a database error.
    pub async fn update_status(
        &self,
        session_id: &str,
        next: BookingStatus,
    ) -> AppResult<Booking> {
        let mut booking = self
            .get_by_session(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {session_id}")))?;

        if !booking.status.can_transition_to(next) {
            return Err(AppError::invalid_input(format!(
                "Cannot transition booking from {} to {}",
                booking.status.as_str(),
                next.as_str()
            )));
        }

        let now = Utc::now();
        sqlx::query(
            r"
            UPDATE bookings SET status = $1, updated_at = $2 WHERE session_id = $3
            ",
        )
        .bind(next.as_str())
        .bind(now.to_rfc3339())
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update booking status: {e}")))?;

        booking.status = next;
        booking.updated_at = now;
        Ok(booking)
    }
}

fn row_to_booking(row: &SqliteRow) -> AppResult<Booking> {
    let id_str: String = row.get("id");
    let trainer_id_str: String = row.get("trainer_id");
    let date_str: String = row.get("date");
    let time_slot_str: String = row.get("time_slot");
    let status_str: String = row.get("status");
    let is_one_time_only: i64 = row.get("is_one_time_only");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::internal(format!("Invalid booking UUID: {e}")))?;
    let trainer_id = Uuid::parse_str(&trainer_id_str)
        .map_err(|e| AppError::internal(format!("Invalid trainer UUID: {e}")))?;
    let date = date_str
        .parse::<NaiveDate>()
        .map_err(|e| AppError::internal(format!("Invalid booking date: {e}")))?;
    let time_slot = TimeSlot::parse(&time_slot_str)
        .ok_or_else(|| AppError::internal(format!("Unknown time slot: {time_slot_str}")))?;

    Ok(Booking {
        id,
        trainer_id,
        trainer_name: row.get("trainer_name"),
        user_name: row.get("user_name"),
        user_email: row.get("user_email"),
        user_phone: row.get("user_phone"),
        date,
        time_slot,
        session_id: row.get("session_id"),
        join_code: row.get("join_code"),
        status: BookingStatus::parse(&status_str),
        is_one_time_only: is_one_time_only != 0,
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slot_labels_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::parse(slot.as_str()), Some(slot));
        }
        assert_eq!(TimeSlot::parse("12:00 PM"), None);
        assert_eq!(TimeSlot::parse("9:00"), None);
    }

    #[test]
    fn status_transitions_are_monotonic() {
        use BookingStatus::{Booked, Cancelled, Completed, Pending};

        assert!(Pending.can_transition_to(Booked));
        assert!(Booked.can_transition_to(Completed));
        assert!(Booked.can_transition_to(Cancelled));

        assert!(!Completed.can_transition_to(Booked));
        assert!(!Cancelled.can_transition_to(Booked));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Booked.can_transition_to(Booked));
    }

    #[test]
    fn status_parse_defaults_to_booked() {
        assert_eq!(BookingStatus::parse("cancelled"), BookingStatus::Cancelled);
        assert_eq!(BookingStatus::parse("bogus"), BookingStatus::Booked);
    }
}
