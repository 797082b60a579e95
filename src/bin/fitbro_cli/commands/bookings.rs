// ABOUTME: Booking flow commands for fitbro-cli
// ABOUTME: Drives the booking state machine, renders tickets, and joins video calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

use chrono::NaiveDate;

use fitbro_booking_server::client::BookingApiClient;
use fitbro_booking_server::database::{Booking, TimeSlot};
use fitbro_booking_server::errors::{AppError, AppResult};
use fitbro_booking_server::flow::{render_ticket, BookingFlow, BookingForm};
use fitbro_booking_server::integrations::AnonymousIdentity;

use crate::commands::trainers::parse_trainer_id;

/// Run the booking flow for one attempt and print the ticket
pub async fn book(
    client: &BookingApiClient,
    trainer_id: &str,
    name: String,
    email: String,
    phone: String,
    date: Option<String>,
    slot: Option<String>,
) -> AppResult<()> {
    let trainer = client.get_trainer(parse_trainer_id(trainer_id)?).await?;

    let date = date
        .map(|value| {
            value.parse::<NaiveDate>().map_err(|_| {
                AppError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {value}"))
            })
        })
        .transpose()?;
    let time_slot = slot.as_deref().and_then(TimeSlot::parse);

    // Identity is delegated externally; the anonymous provider leaves the
    // form to the command-line arguments.
    let mut form = BookingForm::prefilled(&AnonymousIdentity);
    form.name = name;
    form.email = email;
    form.phone = phone;
    form.date = date;
    form.time_slot = time_slot;

    let flow = BookingFlow::new(form).try_submit(&trainer);
    let request = match &flow {
        BookingFlow::Submitting { request, .. } => request.clone(),
        BookingFlow::FormEntry { field_errors, .. } => {
            for error in field_errors {
                println!("  {}: {}", error.field, error.message);
            }
            return Err(AppError::invalid_input("Booking form is incomplete"));
        }
        BookingFlow::Confirmed { .. } | BookingFlow::Error { .. } => {
            return Err(AppError::internal("Unexpected booking flow state"));
        }
    };

    let flow = flow.resolve(client.create_booking(&request).await);
    match &flow {
        BookingFlow::Confirmed { booking } => {
            println!("Appointment booked successfully!\n");
            println!("{}", render_ticket(booking, &trainer));
            if let Some(handoff) = flow.video_join() {
                println!(
                    "Join the video call with:\n  fitbro-cli join {} --name \"{}\"",
                    handoff.room_key, handoff.display_name
                );
            }
            Ok(())
        }
        BookingFlow::Error { message, .. } => {
            Err(AppError::invalid_input(format!("Booking failed: {message}")))
        }
        BookingFlow::FormEntry { .. } | BookingFlow::Submitting { .. } => {
            Err(AppError::internal("Unexpected booking flow state"))
        }
    }
}

/// Show a booking by session id
pub async fn show(client: &BookingApiClient, session_id: &str) -> AppResult<()> {
    let booking = client.get_booking_by_session(session_id).await?;
    print_booking(&booking);
    Ok(())
}

/// List bookings for an email
pub async fn list(client: &BookingApiClient, email: &str) -> AppResult<()> {
    let bookings = client.get_bookings_by_email(email).await?;
    if bookings.is_empty() {
        println!("No bookings for {email}.");
        return Ok(());
    }
    for booking in bookings {
        print_booking(&booking);
    }
    Ok(())
}

/// Fetch and print a video-call join grant
pub async fn join(
    client: &BookingApiClient,
    session_id: &str,
    name: Option<String>,
) -> AppResult<()> {
    let display_name = match name {
        Some(name) => name,
        None => client.get_booking_by_session(session_id).await?.user_name,
    };
    let grant = client.video_join_grant(session_id, &display_name).await?;

    println!("Room:        {}", grant.room_id);
    println!("Joining as:  {} ({})", grant.user_name, grant.user_id);
    if let Some(app_id) = grant.app_id {
        println!("SDK app id:  {app_id}");
    }
    Ok(())
}

/// Generate a fitness plan via the server-side webhook proxy
pub async fn plan(client: &BookingApiClient, input: &str) -> AppResult<()> {
    let plan = client.generate_plan(input).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn print_booking(booking: &Booking) {
    println!(
        "{}  {} with {} on {} at {} [{}] (join code {})",
        booking.session_id,
        booking.user_name,
        booking.trainer_name,
        booking.date,
        booking.time_slot.as_str(),
        booking.status.as_str(),
        booking.join_code
    );
}
