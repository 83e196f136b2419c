//! Test helper module for creative-service integration tests.

#![allow(dead_code)]

use creative_service::config::{CreativeConfig, GoogleConfig, ModelConfig, StorageConfig};
use creative_service::services::providers::mock::MockTextProvider;
use creative_service::services::providers::TextProvider;
use creative_service::Application;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub dna_path: PathBuf,
    pub exemplars_path: PathBuf,
    _data_dir: TempDir,
}

/// The DNA document seeded before each test.
pub fn seed_dna() -> Value {
    json!({
        "voice": {
            "tone": "playful",
            "personality": ["bold", "warm"]
        },
        "formats": {
            "brief": {
                "type": "OBJECT",
                "properties": {
                    "headline": { "type": "STRING" },
                    "body": { "type": "STRING" }
                },
                "required": ["headline", "body"]
            }
        }
    })
}

impl TestApp {
    /// Spawn a test application with the mock provider enabled.
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(true))).await
    }

    /// Spawn a test application around an explicit provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let dna_path = data_dir.path().join("brand_dna.json");
        let exemplars_path = data_dir.path().join("exemplars.json");

        std::fs::write(&dna_path, seed_dna().to_string()).expect("Failed to seed brand DNA");

        let config = CreativeConfig {
            common: CoreConfig {
                port: 0, // Random port
                log_level: "warn".to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-2.0-flash".to_string(),
            },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
            storage: StorageConfig {
                dna_path: dna_path.display().to_string(),
                exemplars_path: exemplars_path.display().to_string(),
            },
        };

        let app = Application::with_provider(config, provider)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            address: format!("http://localhost:{}", port),
            dna_path,
            exemplars_path,
            _data_dir: data_dir,
        }
    }

    /// Read the exemplars file straight from disk.
    pub fn stored_exemplars(&self) -> Vec<Value> {
        let bytes = std::fs::read(&self.exemplars_path).expect("exemplars file missing");
        serde_json::from_slice(&bytes).expect("exemplars file is not a JSON array")
    }
}
