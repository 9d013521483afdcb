use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored appointment request. Rows are written once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub department: String,
    pub doctor: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored contact-form message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
