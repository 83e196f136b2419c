//! Brand DNA endpoint integration tests for creative-service.
//!
//! Run with: cargo test -p creative-service --test dna_test

mod common;

use common::{seed_dna, TestApp};
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn get_dna_returns_the_stored_document() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/dna", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let dna: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(dna, seed_dna());
}

#[tokio::test]
async fn dna_round_trips_unchanged_including_unknown_keys() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let replacement = json!({
        "voice": { "tone": "deadpan" },
        "formats": {
            "brief": { "type": "OBJECT" },
            "social_post": { "type": "OBJECT" }
        },
        "campaign_notes": ["Q3 refresh", "new palette"]
    });

    let response = client
        .post(format!("{}/api/dna", app.address))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(ack["message"], "Brand DNA updated successfully.");

    let fetched: serde_json::Value = client
        .get(format!("{}/api/dna", app.address))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(fetched, replacement);
}

#[tokio::test]
async fn replacing_dna_with_an_incomplete_document_degrades_health() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Any valid JSON is accepted on write; generation needs voice and
    // formats.brief, so health degrades until a full document is restored.
    let response = client
        .post(format!("{}/api/dna", app.address))
        .json(&json!({ "voice": { "tone": "curt" } }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let health = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(health.status().as_u16(), 503);
}

#[tokio::test]
async fn get_dna_fails_when_the_file_is_missing() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    std::fs::remove_file(&app.dna_path).expect("Failed to remove DNA file");

    let response = client
        .get(format!("{}/api/dna", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
}
