// ABOUTME: Integration tests for the booking record store
// ABOUTME: Covers session-id uniqueness enforcement and status lifecycle transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;

use common::{create_test_database, seed_test_trainers};
use fitbro_booking_server::database::{
    BookingStatus, NewBookingRecord, TimeSlot, Trainer,
};
use fitbro_booking_server::errors::ErrorCode;
use fitbro_booking_server::session_codes::SessionCodes;

fn record_for(trainer: &Trainer) -> NewBookingRecord {
    NewBookingRecord {
        trainer_id: trainer.id,
        trainer_name: trainer.name.clone(),
        user_name: "Jane Doe".to_owned(),
        user_email: "jane@example.com".to_owned(),
        user_phone: "5551234567".to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time_slot: TimeSlot::TenAm,
    }
}

#[tokio::test]
async fn duplicate_session_id_is_rejected_as_conflict() {
    let (database, _dir) = create_test_database().await.unwrap();
    let trainers = seed_test_trainers(&database).await.unwrap();
    let bookings = database.bookings();
    let record = record_for(&trainers[0]);

    let codes = SessionCodes::generate();
    bookings.insert(&record, &codes).await.unwrap();

    // The store, not the generator, is what guarantees uniqueness
    let err = bookings.insert(&record, &codes).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceConflict);
}

#[tokio::test]
async fn fresh_codes_insert_cleanly_after_a_collision() {
    let (database, _dir) = create_test_database().await.unwrap();
    let trainers = seed_test_trainers(&database).await.unwrap();
    let bookings = database.bookings();
    let record = record_for(&trainers[0]);

    let codes = SessionCodes::generate();
    bookings.insert(&record, &codes).await.unwrap();
    bookings.insert(&record, &codes).await.unwrap_err();

    let fresh = SessionCodes::generate();
    let booking = bookings.insert(&record, &fresh).await.unwrap();
    assert_eq!(booking.session_id, fresh.session_id);
    assert_eq!(booking.join_code, fresh.join_code);
}

#[tokio::test]
async fn booked_sessions_can_complete_or_cancel_but_not_reopen() {
    let (database, _dir) = create_test_database().await.unwrap();
    let trainers = seed_test_trainers(&database).await.unwrap();
    let bookings = database.bookings();

    let completed = bookings
        .insert(&record_for(&trainers[0]), &SessionCodes::generate())
        .await
        .unwrap();
    let cancelled = bookings
        .insert(&record_for(&trainers[0]), &SessionCodes::generate())
        .await
        .unwrap();

    let booking = bookings
        .update_status(&completed.session_id, BookingStatus::Completed)
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Completed);

    let booking = bookings
        .update_status(&cancelled.session_id, BookingStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Cancelled);

    // Terminal states cannot transition again
    let err = bookings
        .update_status(&completed.session_id, BookingStatus::Cancelled)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = bookings
        .update_status(&cancelled.session_id, BookingStatus::Booked)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    // The persisted status survives the rejected transition
    let fetched = bookings
        .get_by_session(&completed.session_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status, BookingStatus::Completed);
}

#[tokio::test]
async fn update_status_for_unknown_session_is_not_found() {
    let (database, _dir) = create_test_database().await.unwrap();

    let err = database
        .bookings()
        .update_status("nosuchsession", BookingStatus::Completed)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
