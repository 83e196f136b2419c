use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::dtos::AckResponse;
use crate::AppState;

/// Return the stored brand DNA document verbatim.
pub async fn get_dna(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let dna = state.store.load_dna_document().await?;
    Ok(Json(dna))
}

/// Replace the brand DNA document wholesale. Any valid JSON body is
/// accepted; generation later fails if `voice` or `formats.brief` is gone.
pub async fn update_dna(
    State(state): State<AppState>,
    Json(dna): Json<Value>,
) -> Result<Json<AckResponse>, AppError> {
    state.store.save_dna(&dna).await?;

    tracing::info!("Brand DNA replaced");

    Ok(Json(AckResponse::new("Brand DNA updated successfully.")))
}
