use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::{AckResponse, ExemplarUploadRequest};
use crate::AppState;

/// Append one exemplar ad to the stored list.
pub async fn upload_exemplar(
    State(state): State<AppState>,
    Json(payload): Json<ExemplarUploadRequest>,
) -> Result<Json<AckResponse>, AppError> {
    payload.validate()?;

    let text = payload
        .text
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Text content is required.")))?;

    let exemplar = state.store.append_exemplar(text).await?;

    tracing::info!(exemplar_id = exemplar.id, "Exemplar uploaded");

    Ok(Json(AckResponse::new("Exemplar uploaded successfully.")))
}
