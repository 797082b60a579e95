// ABOUTME: Command-line client for the FitBro booking API
// ABOUTME: Drives the booking flow state machine over HTTP and prints tickets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! # FitBro CLI
//!
//! ```bash
//! # List trainers
//! fitbro-cli trainers
//!
//! # Book a session
//! fitbro-cli book --trainer <id> --name "Jane Doe" --email jane@example.com \
//!     --phone "(555) 123-4567" --date 2025-06-01 --slot "10:00 AM"
//!
//! # Look up a booking and join its video call
//! fitbro-cli booking <session-id>
//! fitbro-cli join <session-id>
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fitbro_booking_server::client::BookingApiClient;

#[derive(Parser)]
#[command(
    name = "fitbro-cli",
    about = "FitBro booking client",
    long_about = "Command-line client for the FitBro booking API"
)]
struct Cli {
    /// Base URL of the booking API
    #[arg(long, default_value = "http://localhost:5000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all trainers
    Trainers,
    /// Show one trainer
    Trainer {
        /// Trainer id
        id: String,
    },
    /// Book a session with a trainer
    Book {
        /// Trainer id
        #[arg(long)]
        trainer: String,
        /// Your name
        #[arg(long, default_value = "")]
        name: String,
        /// Your email
        #[arg(long, default_value = "")]
        email: String,
        /// Your phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Time slot label, e.g. "10:00 AM"
        #[arg(long)]
        slot: Option<String>,
    },
    /// Show a booking by session id
    Booking {
        /// Session identifier
        session_id: String,
    },
    /// List bookings for an email
    Bookings {
        /// User email
        email: String,
    },
    /// Fetch a video-call join grant for a booked session
    Join {
        /// Session identifier (the room key)
        session_id: String,
        /// Display name override
        #[arg(long)]
        name: Option<String>,
    },
    /// Generate a fitness plan via the agent webhook
    Plan {
        /// Free-text answers for the planner
        #[arg(long)]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = BookingApiClient::new(&cli.api_url)?;

    match cli.command {
        Commands::Trainers => commands::trainers::list(&client).await?,
        Commands::Trainer { id } => commands::trainers::show(&client, &id).await?,
        Commands::Book {
            trainer,
            name,
            email,
            phone,
            date,
            slot,
        } => {
            commands::bookings::book(&client, &trainer, name, email, phone, date, slot).await?;
        }
        Commands::Booking { session_id } => {
            commands::bookings::show(&client, &session_id).await?;
        }
        Commands::Bookings { email } => commands::bookings::list(&client, &email).await?,
        Commands::Join { session_id, name } => {
            commands::bookings::join(&client, &session_id, name).await?;
        }
        Commands::Plan { input } => commands::bookings::plan(&client, &input).await?,
    }

    Ok(())
}
