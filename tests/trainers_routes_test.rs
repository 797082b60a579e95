// ABOUTME: Integration tests for the trainer directory route handlers
// ABOUTME: Covers listing, lookup by id, and not-found behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use common::{seed_test_trainers, setup_test_server};
use fitbro_booking_server::database::Trainer;
use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn list_trainers_returns_all_in_insertion_order() {
    let server = setup_test_server().await.unwrap();
    seed_test_trainers(&server.resources.database).await.unwrap();

    let response = AxumTestRequest::get("/api/trainers")
        .send(server.router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let trainers: Vec<Trainer> = response.json();
    assert_eq!(trainers.len(), 2);
    assert_eq!(trainers[0].name, "John Smith");
    assert_eq!(trainers[1].name, "Sarah Johnson");
}

#[tokio::test]
async fn list_trainers_is_empty_before_seeding() {
    let server = setup_test_server().await.unwrap();

    let response = AxumTestRequest::get("/api/trainers")
        .send(server.router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let trainers: Vec<Trainer> = response.json();
    assert!(trainers.is_empty());
}

#[tokio::test]
async fn get_trainer_returns_all_fields_intact() {
    let server = setup_test_server().await.unwrap();
    let seeded = seed_test_trainers(&server.resources.database).await.unwrap();

    let response = AxumTestRequest::get(&format!("/api/trainers/{}", seeded[0].id))
        .send(server.router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let trainer: Trainer = response.json();
    assert_eq!(trainer.id, seeded[0].id);
    assert_eq!(trainer.name, "John Smith");
    assert_eq!(trainer.specialty, "Strength & Conditioning");
    assert_eq!(trainer.experience, "8 years");
    assert_eq!(trainer.image, "https://randomuser.me/api/portraits/men/32.jpg");
    assert_eq!(trainer.availability, vec!["Monday", "Wednesday", "Friday"]);
    assert!((trainer.rating - 4.8).abs() < f64::EPSILON);
}

#[tokio::test]
async fn get_unknown_trainer_returns_404_with_message() {
    let server = setup_test_server().await.unwrap();
    seed_test_trainers(&server.resources.database).await.unwrap();

    let response = AxumTestRequest::get(&format!("/api/trainers/{}", Uuid::new_v4()))
        .send(server.router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn get_trainer_with_malformed_id_returns_404() {
    let server = setup_test_server().await.unwrap();

    let response = AxumTestRequest::get("/api/trainers/not-a-uuid")
        .send(server.router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
