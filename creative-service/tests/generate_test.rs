//! Brief generation integration tests for creative-service.
//!
//! These tests drive POST /api/generate against the mock provider.
//! Run with: cargo test -p creative-service --test generate_test

mod common;

use common::TestApp;
use creative_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn generate_returns_the_providers_brief() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "Sparkling water", "audience": "runners" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let brief: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(brief["headline"], "Mock headline");

    // The prompt carried the caller's input all the way to the provider.
    let body = brief["body"].as_str().expect("body is not a string");
    assert!(body.contains("Sparkling water"));
    assert!(body.contains("runners"));
}

#[tokio::test]
async fn generate_rejects_missing_audience() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "Sparkling water" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn generate_rejects_empty_product() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "", "audience": "runners" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn generate_fails_when_dna_is_missing() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    std::fs::remove_file(&app.dna_path).expect("Failed to remove DNA file");

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "Sparkling water", "audience": "runners" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn generate_surfaces_provider_failures_as_500() {
    let app = TestApp::spawn_with_provider(Arc::new(MockTextProvider::new(false))).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "Sparkling water", "audience": "runners" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn generate_includes_stored_exemplars_in_the_prompt() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .post(format!("{}/api/upload", app.address))
        .json(&json!({ "text": "Legendary slogan from last year" }))
        .send()
        .await
        .expect("Failed to upload exemplar");

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "product": "Sparkling water", "audience": "runners" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let brief: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let body = brief["body"].as_str().expect("body is not a string");
    assert!(body.contains("Legendary slogan from last year"));
}
