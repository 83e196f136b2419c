use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::GenerateBriefRequest;
use crate::services::prompt;
use crate::services::providers::GenerationParams;
use crate::AppState;

/// Generate a creative brief for a product/audience pair.
///
/// Loads the brand DNA and exemplars, assembles the prompt, and makes a
/// single schema-constrained call to the provider. The provider's text is
/// parsed as JSON and returned verbatim; nothing is persisted or retried.
pub async fn generate_brief(
    State(state): State<AppState>,
    Json(payload): Json<GenerateBriefRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let dna = state.store.load_dna().await?;
    let exemplars = state.store.load_exemplars().await?;

    let prompt = prompt::build_brief_prompt(&dna, &exemplars, &payload)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to assemble prompt: {}", e)))?;

    let params = GenerationParams {
        response_schema: Some(dna.formats.brief.clone()),
        ..Default::default()
    };

    let response = state.text_provider.generate(&prompt, &params).await?;

    let text = response.text.ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("AI response contained no candidate text"))
    })?;

    let brief: Value = serde_json::from_str(&text).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to parse brief from AI response: {}", e))
    })?;

    tracing::info!(
        exemplar_count = exemplars.len(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Generated creative brief"
    );

    Ok(Json(brief))
}
