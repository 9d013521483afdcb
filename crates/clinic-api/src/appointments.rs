use axum::{Json, extract::State};
use tracing::{error, info, warn};

use clinic_types::api::{APPOINTMENT_ACK, AppointmentRequest, SubmissionResponse};

use crate::error::ApiError;
use crate::extract::Submission;
use crate::state::AppState;

/// `POST /api/appointments`: store the request and echo it back with its id.
///
/// Field contents are not checked; a malformed email or phone number is
/// stored as given. Submitting twice stores two rows.
pub async fn create_appointment(
    State(state): State<AppState>,
    Submission(req): Submission<AppointmentRequest>,
) -> Result<Json<SubmissionResponse<AppointmentRequest>>, ApiError> {
    // Run blocking DB insert off the async runtime
    let (id, req) = tokio::task::spawn_blocking(move || {
        state.db.insert_appointment(&req).map(|id| (id, req))
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::Internal })?
    .map_err(|e| {
        warn!("Appointment insert failed: {}", e);
        ApiError::Storage(e.to_string())
    })?;

    info!(id, department = %req.department, "Appointment stored");

    Ok(Json(SubmissionResponse {
        message: APPOINTMENT_ACK.to_string(),
        data: req,
        id,
    }))
}
