// ABOUTME: Trainer directory commands for fitbro-cli
// ABOUTME: Lists and shows trainer profiles from the booking API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

use uuid::Uuid;

use fitbro_booking_server::client::BookingApiClient;
use fitbro_booking_server::database::Trainer;
use fitbro_booking_server::errors::{AppError, AppResult};

/// Parse a trainer id argument
pub fn parse_trainer_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::invalid_input(format!("Invalid trainer id: {id}")))
}

/// List all trainers
pub async fn list(client: &BookingApiClient) -> AppResult<()> {
    let trainers = client.list_trainers().await?;
    if trainers.is_empty() {
        println!("No trainers available. Run seed-trainers first.");
        return Ok(());
    }
    for trainer in trainers {
        print_summary(&trainer);
    }
    Ok(())
}

/// Show one trainer in full
pub async fn show(client: &BookingApiClient, id: &str) -> AppResult<()> {
    let trainer = client.get_trainer(parse_trainer_id(id)?).await?;
    print_summary(&trainer);
    println!("  {}", trainer.bio);
    println!("  Available on: {}", trainer.availability.join(", "));
    Ok(())
}

fn print_summary(trainer: &Trainer) {
    println!(
        "{}  {} - {} ({}, rated {:.1})",
        trainer.id, trainer.name, trainer.specialty, trainer.experience, trainer.rating
    );
}
