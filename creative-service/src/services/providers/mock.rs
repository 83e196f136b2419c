//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, Prompt, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use serde_json::json;

/// Mock text provider for testing. Returns a canned JSON brief that echoes
/// the user prompt so tests can assert the input reached the provider.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &Prompt,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        let brief = json!({
            "headline": "Mock headline",
            "body": format!("Mock brief for: {}", prompt.user.trim()),
        });

        Ok(ProviderResponse {
            text: Some(brief.to_string()),
            input_tokens: prompt.user.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
