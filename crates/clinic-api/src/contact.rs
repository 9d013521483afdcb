use axum::{Json, extract::State};
use tracing::{error, info, warn};

use clinic_types::api::{CONTACT_ACK, ContactRequest, SubmissionResponse};

use crate::error::ApiError;
use crate::extract::Submission;
use crate::state::AppState;

/// `POST /api/contact`
pub async fn create_contact_message(
    State(state): State<AppState>,
    Submission(req): Submission<ContactRequest>,
) -> Result<Json<SubmissionResponse<ContactRequest>>, ApiError> {
    let (id, req) = tokio::task::spawn_blocking(move || {
        state.db.insert_contact_message(&req).map(|id| (id, req))
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::Internal })?
    .map_err(|e| {
        warn!("Contact message insert failed: {}", e);
        ApiError::Storage(e.to_string())
    })?;

    info!(id, "Contact message stored");

    Ok(Json(SubmissionResponse {
        message: CONTACT_ACK.to_string(),
        data: req,
        id,
    }))
}
