//! Database row types; these map directly to SQLite rows.
//! Kept apart from clinic-types so the DB layer stays independent.

pub struct AppointmentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub department: String,
    pub doctor: String,
    pub message: Option<String>,
    pub created_at: String,
}

pub struct MessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}
