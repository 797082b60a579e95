// ABOUTME: Trainer seeding utility for the FitBro booking server
// ABOUTME: Upserts the trainer profiles the booking flow selects from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! # Trainer Seeder
//!
//! Trainers are created outside the booking flow; this binary seeds the
//! profiles the frontend ships with and is safe to run repeatedly.
//!
//! ```bash
//! # Seed trainers into the default database
//! cargo run --bin seed-trainers
//!
//! # Override database URL
//! cargo run --bin seed-trainers -- --database-url sqlite:./data/fitbro.db
//!
//! # Dry run (show what would be done)
//! cargo run --bin seed-trainers -- --dry-run
//! ```

use std::env;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fitbro_booking_server::database::{Database, NewTrainer};
use fitbro_booking_server::errors::AppError;

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("{0}")]
    App(#[from] AppError),
}

#[derive(Parser)]
#[command(
    name = "seed-trainers",
    about = "FitBro Trainer Seeder",
    long_about = "Upsert trainer profiles into the booking database"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Show what would be done without writing
    #[arg(long)]
    dry_run: bool,
}

fn seed_profiles() -> Vec<NewTrainer> {
    vec![
        NewTrainer {
            name: "John Smith".to_owned(),
            specialty: "Strength & Conditioning".to_owned(),
            experience: "8 years".to_owned(),
            bio: "John is a certified strength and conditioning specialist with expertise in \
                  powerlifting and functional training. He focuses on helping clients build \
                  strength while maintaining proper form to prevent injuries."
                .to_owned(),
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
            bio: "Sarah is a 500-hour certified yoga instructor specializing in vinyasa and \
                  restorative yoga. She helps clients improve flexibility, reduce stress, and \
                  enhance mind-body connection through personalized yoga sessions."
                .to_owned(),
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

#[tokio::main]
async fn main() -> Result<(), SeedError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SeedArgs::parse();
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/fitbro.db".to_owned());

    let database = Database::new(&database_url).await?;
    let trainers = database.trainers();

    let mut created = 0u32;
    let mut skipped = 0u32;
    for profile in seed_profiles() {
        if trainers.get_by_name(&profile.name).await?.is_some() {
            info!("trainer already seeded: {}", profile.name);
            skipped += 1;
            continue;
        }
        if args.dry_run {
            info!("[dry-run] would create trainer: {}", profile.name);
            continue;
        }
        let trainer = trainers.create(&profile).await?;
        info!("created trainer {} ({})", trainer.name, trainer.id);
        created += 1;
    }

    info!("seeding complete: {created} created, {skipped} already present");
    Ok(())
}
