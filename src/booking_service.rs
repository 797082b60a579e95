// ABOUTME: Booking service with request validation and atomic session-unique creation
// ABOUTME: Validates trainer reference, contact fields, and slot before a single durable write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Booking service
//!
//! Validates a booking request and persists exactly one booking atomically
//! with respect to session-identifier uniqueness. On the (vanishingly rare)
//! session-id collision the service regenerates the codes and retries a
//! bounded number of times before surfacing a conflict.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::{
    Booking, BookingStatus, Database, NewBookingRecord, TimeSlot, Trainer,
};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::session_codes::SessionCodes;

/// Attempts before a session-id collision is surfaced as a conflict
const MAX_SESSION_CODE_ATTEMPTS: u32 = 3;

/// Digits a phone number must normalize to
const PHONE_DIGITS: usize = 10;

// Same shape check the booking form applies client-side.
#[allow(clippy::unwrap_used)] // Safe: pattern is a compile-time constant
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

/// A booking submission before validation
///
/// Session id and join code are server-assigned and therefore absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Trainer to book with; must resolve to an existing trainer
    pub trainer_id: Uuid,
    /// Client name
    pub user_name: String,
    /// Client email
    pub user_email: String,
    /// Client phone; any formatting, must strip to exactly 10 digits
    pub user_phone: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Slot label; must be one of the fixed set
    pub time_slot: String,
}

/// Booking service over the database layer
pub struct BookingService {
    database: Database,
}

impl BookingService {
    /// Create a new booking service
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Validate a booking request and persist exactly one booking
    ///
    /// The trainer name is snapshotted from the resolved trainer rather than
    /// trusted from the client.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unresolvable trainer, `InvalidInput` for any
    /// failed validation rule, `ResourceConflict` when session-id generation
    /// keeps colliding, or a database error.
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> AppResult<Booking> {
        let trainer = self.resolve_trainer(request.trainer_id).await?;
        let record = validate_request(request, &trainer)?;

        let bookings = self.database.bookings();
        for attempt in 1..=MAX_SESSION_CODE_ATTEMPTS {
            let codes = SessionCodes::generate();
            match bookings.insert(&record, &codes).await {
                Ok(booking) => {
                    debug!(
                        session_id = %booking.session_id,
                        trainer = %booking.trainer_name,
                        "booking created"
                    );
                    return Ok(booking);
                }
                Err(err) if err.code == ErrorCode::ResourceConflict => {
                    warn!(attempt, "session id collision, regenerating");
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::conflict(
            "Could not allocate a unique session identifier",
        ))
    }

    /// Get a booking by its session identifier
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the session id was never assigned.
    pub async fn get_by_session(&self, session_id: &str) -> AppResult<Booking> {
        self.database
            .bookings()
            .get_by_session(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking"))
    }

    /// List bookings for a user email; empty when none exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_for_email(&self, email: &str) -> AppResult<Vec<Booking>> {
        self.database.bookings().list_for_email(email).await
    }

    /// Mark a booked session as completed
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown session id or `InvalidInput` when
    /// the booking is not in the `booked` state.
    pub async fn complete(&self, session_id: &str) -> AppResult<Booking> {
        self.database
            .bookings()
            .update_status(session_id, BookingStatus::Completed)
            .await
    }

    /// Cancel a booked session
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown session id or `InvalidInput` when
    /// the booking is not in the `booked` state.
    pub async fn cancel(&self, session_id: &str) -> AppResult<Booking> {
        self.database
            .bookings()
            .update_status(session_id, BookingStatus::Cancelled)
            .await
    }

    async fn resolve_trainer(&self, trainer_id: Uuid) -> AppResult<Trainer> {
        self.database
            .trainers()
            .get(trainer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trainer {trainer_id}")))
    }
}

/// Apply the booking validation rules, producing a record ready to insert
///
/// # Errors
///
/// Returns `InvalidInput` naming the first rule that failed.
pub fn validate_request(
    request: &CreateBookingRequest,
    trainer: &Trainer,
) -> AppResult<NewBookingRecord> {
    let user_name = request.user_name.trim();
    if user_name.is_empty() {
        return Err(AppError::invalid_input("Name is required"));
    }

    let user_email = request.user_email.trim();
    if user_email.is_empty() {
        return Err(AppError::invalid_input("Email is required"));
    }
    if !email_is_valid(user_email) {
        return Err(AppError::invalid_input("Invalid email address"));
    }

    let user_phone = request.user_phone.trim();
    if user_phone.is_empty() {
        return Err(AppError::invalid_input("Phone number is required"));
    }
    if normalize_phone(user_phone).len() != PHONE_DIGITS {
        return Err(AppError::invalid_input(
            "Invalid phone number (10 digits required)",
        ));
    }

    let time_slot = TimeSlot::parse(&request.time_slot)
        .ok_or_else(|| AppError::invalid_input("Please select a time slot"))?;

    // Past dates are deliberately not rejected: the reference behavior leaves
    // that to the client date picker.
    Ok(NewBookingRecord {
        trainer_id: trainer.id,
        trainer_name: trainer.name.clone(),
        user_name: user_name.to_owned(),
        user_email: user_email.to_owned(),
        user_phone: user_phone.to_owned(),
        date: request.date,
        time_slot,
    })
}

/// Strip everything but digits from a phone value
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Whether a value matches the standard email-address shape
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_trainer() -> Trainer {
        let now = Utc::now();
        Trainer {
            id: Uuid::new_v4(),
            name: "John Smith".to_owned(),
            specialty: "Strength & Conditioning".to_owned(),
            experience: "8 years".to_owned(),
            bio: "Certified strength and conditioning specialist.".to_owned(),
            image: "https://randomuser.me/api/portraits/men/32.jpg".to_owned(),
            availability: vec!["Monday".to_owned(), "Wednesday".to_owned()],
            rating: 4.8,
            created_at: now,
            updated_at: now,
        }
    }

    fn valid_request(trainer: &Trainer) -> CreateBookingRequest {
        CreateBookingRequest {
            trainer_id: trainer.id,
            user_name: "Jane Doe".to_owned(),
            user_email: "jane@example.com".to_owned(),
            user_phone: "5551234567".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time_slot: "10:00 AM".to_owned(),
        }
    }

    #[test]
    fn valid_request_passes_and_snapshots_trainer_name() {
        let trainer = test_trainer();
        let record = validate_request(&valid_request(&trainer), &trainer).unwrap();
        assert_eq!(record.trainer_name, "John Smith");
        assert_eq!(record.time_slot, TimeSlot::TenAm);
    }

    #[test]
    fn empty_name_is_rejected() {
        let trainer = test_trainer();
        let mut request = valid_request(&trainer);
        request.user_name = "   ".to_owned();
        let err = validate_request(&request, &trainer).unwrap_err();
        assert_eq!(err.message, "Name is required");
    }

    #[test]
    fn email_shape_is_checked() {
        let trainer = test_trainer();

        let mut request = valid_request(&trainer);
        request.user_email = "not-an-email".to_owned();
        let err = validate_request(&request, &trainer).unwrap_err();
        assert_eq!(err.message, "Invalid email address");

        request.user_email = "a@b.com".to_owned();
        assert!(validate_request(&request, &trainer).is_ok());
    }

    #[test]
    fn phone_must_strip_to_ten_digits() {
        let trainer = test_trainer();

        let mut request = valid_request(&trainer);
        request.user_phone = "123".to_owned();
        assert!(validate_request(&request, &trainer).is_err());

        request.user_phone = "(555) 123-4567".to_owned();
        let record = validate_request(&request, &trainer).unwrap();
        assert_eq!(record.user_phone, "(555) 123-4567");
    }

    #[test]
    fn slot_outside_the_fixed_set_is_rejected() {
        let trainer = test_trainer();
        let mut request = valid_request(&trainer);
        request.time_slot = "12:00 PM".to_owned();
        let err = validate_request(&request, &trainer).unwrap_err();
        assert_eq!(err.message, "Please select a time slot");
    }

    #[test]
    fn past_dates_are_accepted() {
        let trainer = test_trainer();
        let mut request = valid_request(&trainer);
        request.date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(validate_request(&request, &trainer).is_ok());
    }

    #[test]
    fn normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("555.123.4567"), "5551234567");
        assert_eq!(normalize_phone("123"), "123");
    }
}
