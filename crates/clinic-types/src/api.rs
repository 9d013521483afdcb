use serde::{Deserialize, Serialize};

// -- Appointments --

pub const APPOINTMENT_ACK: &str = "Appointment scheduled successfully";

/// Body of `POST /api/appointments`. Accepted as JSON or url-encoded form.
///
/// Only presence is enforced here; the contents of each field are stored
/// as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub department: String,
    pub doctor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// -- Contact --

pub const CONTACT_ACK: &str = "Message sent successfully";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// -- Responses --

/// Acknowledgment returned for every accepted submission: a confirmation
/// line, the submission as it was received, and the id of the new row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse<T> {
    pub message: String,
    pub data: T,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
