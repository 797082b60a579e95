// ABOUTME: Client-side booking flow state machine over a single booking attempt
// ABOUTME: Form validation, submission gating, ticket rendering, and video-call hand-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Booking flow
//!
//! A state machine over a single booking attempt: `FormEntry -> Submitting ->
//! Confirmed`, with `Error` returning to `FormEntry` while keeping the form.
//! Validation mirrors the server rules and blocks submission until all pass;
//! only one attempt is in flight at a time, guarded by disabling submit
//! while `Submitting`.

use chrono::NaiveDate;

use crate::booking_service::{email_is_valid, normalize_phone, CreateBookingRequest};
use crate::database::{Booking, TimeSlot, Trainer};
use crate::errors::AppError;
use crate::integrations::{Identity, IdentityProvider};

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the error belongs to
    pub field: &'static str,
    /// Inline message shown next to the field
    pub message: String,
}

/// The booking form as the user fills it in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// Client name
    pub name: String,
    /// Client email
    pub email: String,
    /// Client phone
    pub phone: String,
    /// Session date
    pub date: Option<NaiveDate>,
    /// Chosen slot
    pub time_slot: Option<TimeSlot>,
}

impl BookingForm {
    /// Prefill name and email from a resolved identity, when one exists
    #[must_use]
    pub fn prefilled(identity_provider: &dyn IdentityProvider) -> Self {
        identity_provider.current_identity().map_or_else(
            Self::default,
            |Identity { name, email }| Self {
                name,
                email,
                ..Self::default()
            },
        )
    }

    /// Check every field, returning all failures
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Name is required".to_owned(),
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "Email is required".to_owned(),
            });
        } else if !email_is_valid(email) {
            errors.push(FieldError {
                field: "email",
                message: "Invalid email address".to_owned(),
            });
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(FieldError {
                field: "phone",
                message: "Phone number is required".to_owned(),
            });
        } else if normalize_phone(phone).len() != 10 {
            errors.push(FieldError {
                field: "phone",
                message: "Invalid phone number (10 digits required)".to_owned(),
            });
        }

        if self.date.is_none() {
            errors.push(FieldError {
                field: "date",
                message: "Please select a date".to_owned(),
            });
        }

        if self.time_slot.is_none() {
            errors.push(FieldError {
                field: "timeSlot",
                message: "Please select a time slot".to_owned(),
            });
        }

        errors
    }
}

/// States of one booking attempt
#[derive(Debug)]
pub enum BookingFlow {
    /// User is filling in the form; field errors render inline
    FormEntry {
        /// Current form contents
        form: BookingForm,
        /// Validation failures from the last submit attempt
        field_errors: Vec<FieldError>,
    },
    /// Request in flight; submit is disabled
    Submitting {
        /// Form contents being submitted
        form: BookingForm,
        /// The validated request on the wire
        request: CreateBookingRequest,
    },
    /// Server returned a booking; ticket and video join are available
    Confirmed {
        /// The persisted booking
        booking: Box<Booking>,
    },
    /// The API rejected the attempt; the form is preserved
    Error {
        /// Form contents to return to
        form: BookingForm,
        /// Inline error message
        message: String,
    },
}

/// Room key and display name handed to the video-call join step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoJoinHandoff {
    /// Room key; the booking's session identifier
    pub room_key: String,
    /// Display name; the booking user's name
    pub display_name: String,
}

impl BookingFlow {
    /// Start a fresh attempt at `FormEntry`
    #[must_use]
    pub fn new(form: BookingForm) -> Self {
        Self::FormEntry {
            form,
            field_errors: Vec::new(),
        }
    }

    /// Attempt to submit the form for the given trainer
    ///
    /// Moves to `Submitting` when every rule passes; stays in `FormEntry`
    /// with inline errors otherwise. No-op outside `FormEntry`/`Error`.
    #[must_use]
    pub fn try_submit(self, trainer: &Trainer) -> Self {
        let form = match self {
            Self::FormEntry { form, .. } | Self::Error { form, .. } => form,
            other @ (Self::Submitting { .. } | Self::Confirmed { .. }) => return other,
        };

        let field_errors = form.validate();
        if !field_errors.is_empty() {
            return Self::FormEntry { form, field_errors };
        }

        // validate() guarantees date and slot are present past this point
        let (Some(date), Some(time_slot)) = (form.date, form.time_slot) else {
            return Self::FormEntry { form, field_errors };
        };

        let request = CreateBookingRequest {
            trainer_id: trainer.id,
            user_name: form.name.trim().to_owned(),
            user_email: form.email.trim().to_owned(),
            user_phone: form.phone.trim().to_owned(),
            date,
            time_slot: time_slot.as_str().to_owned(),
        };
        Self::Submitting { form, request }
    }

    /// Resolve the in-flight request with the API outcome
    ///
    /// Moves `Submitting` to `Confirmed` or `Error`; no-op elsewhere.
    #[must_use]
    pub fn resolve(self, outcome: Result<Booking, AppError>) -> Self {
        match self {
            Self::Submitting { form, .. } => match outcome {
                Ok(booking) => Self::Confirmed {
                    booking: Box::new(booking),
                },
                Err(err) => Self::Error {
                    form,
                    message: err.message,
                },
            },
            other => other,
        }
    }

    /// Return from `Error` to `FormEntry`, preserving the form
    #[must_use]
    pub fn acknowledge_error(self) -> Self {
        match self {
            Self::Error { form, .. } => Self::FormEntry {
                form,
                field_errors: Vec::new(),
            },
            other => other,
        }
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        !matches!(self, Self::Submitting { .. })
    }

    /// The confirmed booking, once there is one
    #[must_use]
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Confirmed { booking } => Some(booking),
            _ => None,
        }
    }

    /// Hand-off values for the video-call join step
    #[must_use]
    pub fn video_join(&self) -> Option<VideoJoinHandoff> {
        self.booking().map(|booking| VideoJoinHandoff {
            room_key: booking.session_id.clone(),
            display_name: booking.user_name.clone(),
        })
    }
}

/// Render the confirmation ticket for export
#[must_use]
pub fn render_ticket(booking: &Booking, trainer: &Trainer) -> String {
    let date = booking.date.format("%A, %B %-d, %Y");
    format!(
        "==========================================\n\
         FitBro Appointment Ticket\n\
         ==========================================\n\
         Trainer:   {trainer_name} ({specialty})\n\
         Date:      {date}\n\
         Time:      {slot}\n\
         Client:    {client}\n\
         Contact:   {contact}\n\
         ------------------------------------------\n\
         Video Call Join Code:  {join_code}\n\
         Session ID:            {session_id}\n\
         ------------------------------------------\n\
         Note: This is a one-time appointment. Please\n\
         arrive 5 minutes before your scheduled time.\n\
         For changes or cancellations, contact us at\n\
         least 24 hours in advance.\n",
        trainer_name = booking.trainer_name,
        specialty = trainer.specialty,
        slot = booking.time_slot.as_str(),
        client = booking.user_name,
        contact = booking.user_phone,
        join_code = booking.join_code,
        session_id = booking.session_id,
    )
}
