use crate::models::{AppointmentRow, MessageRow};
use crate::Database;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clinic_types::api::{AppointmentRequest, ContactRequest};
use clinic_types::models::{Appointment, ContactMessage};
use rusqlite::{Connection, OptionalExtension};

/// Format written by SQLite's `datetime('now')` and `CURRENT_TIMESTAMP`.
const SQLITE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

impl Database {
    // -- Appointments --

    /// Insert a new appointment and return its generated id.
    pub fn insert_appointment(&self, req: &AppointmentRequest) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO appointments (name, email, phone, date, department, doctor, message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    req.name,
                    req.email,
                    req.phone,
                    req.date,
                    req.department,
                    req.doctor,
                    req.message,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_appointment(&self, id: i64) -> Result<Option<Appointment>> {
        self.with_conn(|conn| query_appointment(conn, id))?
            .map(appointment_from_row)
            .transpose()
    }

    pub fn count_appointments(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM appointments", [], |r| r.get(0))?)
        })
    }

    // -- Contact messages --

    /// Insert a new contact message and return its generated id.
    pub fn insert_contact_message(&self, req: &ContactRequest) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (name, email, subject, message) VALUES (?1, ?2, ?3, ?4)",
                (&req.name, &req.email, &req.subject, &req.message),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_contact_message(&self, id: i64) -> Result<Option<ContactMessage>> {
        self.with_conn(|conn| query_message(conn, id))?
            .map(message_from_row)
            .transpose()
    }

    pub fn count_contact_messages(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM messages", [], |r| r.get(0))?)
        })
    }
}

fn query_appointment(conn: &Connection, id: i64) -> Result<Option<AppointmentRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, date, department, doctor, message, created_at
         FROM appointments WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(AppointmentRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                date: row.get(4)?,
                department: row.get(5)?,
                doctor: row.get(6)?,
                message: row.get(7)?,
                created_at: row.get(8)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_message(conn: &Connection, id: i64) -> Result<Option<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, subject, message, created_at FROM messages WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                subject: row.get(3)?,
                message: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, SQLITE_DATETIME)
        .with_context(|| format!("Corrupt created_at '{}'", raw))?;
    Ok(naive.and_utc())
}

fn appointment_from_row(row: AppointmentRow) -> Result<Appointment> {
    Ok(Appointment {
        created_at: parse_created_at(&row.created_at)?,
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        date: row.date,
        department: row.department,
        doctor: row.doctor,
        message: row.message,
    })
}

fn message_from_row(row: MessageRow) -> Result<ContactMessage> {
    Ok(ContactMessage {
        created_at: parse_created_at(&row.created_at)?,
        id: row.id,
        name: row.name,
        email: row.email,
        subject: row.subject,
        message: row.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment() -> AppointmentRequest {
        AppointmentRequest {
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            date: "2026-11-02".into(),
            department: "Cardiology".into(),
            doctor: "Dr. Walter White".into(),
            message: Some("Follow-up visit".into()),
        }
    }

    #[test]
    fn insert_appointment_stores_matching_row() {
        let db = Database::open_in_memory().unwrap();
        let req = appointment();

        let id = db.insert_appointment(&req).unwrap();
        assert!(id > 0);
        assert_eq!(db.count_appointments().unwrap(), 1);

        let stored = db.get_appointment(id).unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, req.name);
        assert_eq!(stored.phone, req.phone);
        assert_eq!(stored.doctor, req.doctor);
        assert_eq!(stored.message, req.message);
        assert!(stored.created_at <= Utc::now());
    }

    #[test]
    fn appointment_without_message_stores_null() {
        let db = Database::open_in_memory().unwrap();
        let req = AppointmentRequest { message: None, ..appointment() };

        let id = db.insert_appointment(&req).unwrap();
        assert_eq!(db.get_appointment(id).unwrap().unwrap().message, None);
    }

    #[test]
    fn duplicate_submissions_get_distinct_ids() {
        let db = Database::open_in_memory().unwrap();
        let req = appointment();

        let first = db.insert_appointment(&req).unwrap();
        let second = db.insert_appointment(&req).unwrap();
        assert!(second > first);
        assert_eq!(db.count_appointments().unwrap(), 2);
    }

    #[test]
    fn null_required_column_is_rejected_without_a_row() {
        let db = Database::open_in_memory().unwrap();

        let err = db
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO appointments (name, email, phone, date, department, doctor)
                     VALUES (NULL, 'a@b.co', '555', '2026-11-02', 'Cardiology', 'Dr. Who')",
                    [],
                )?;
                Ok(())
            })
            .unwrap_err();

        assert!(err.to_string().contains("NOT NULL constraint failed: appointments.name"));
        assert_eq!(db.count_appointments().unwrap(), 0);
    }

    #[test]
    fn contact_message_round_trips_through_storage() {
        let db = Database::open_in_memory().unwrap();
        let req = ContactRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Question".into(),
            message: "Hello".into(),
        };

        let id = db.insert_contact_message(&req).unwrap();
        assert_eq!(id, 1);

        let stored = db.get_contact_message(id).unwrap().unwrap();
        assert_eq!(stored.subject, "Question");
        assert_eq!(stored.message, "Hello");
        assert!(db.get_contact_message(id + 1).unwrap().is_none());
    }

    #[test]
    fn tables_are_disjoint() {
        let db = Database::open_in_memory().unwrap();
        db.insert_appointment(&appointment()).unwrap();

        assert_eq!(db.count_appointments().unwrap(), 1);
        assert_eq!(db.count_contact_messages().unwrap(), 0);
    }

    #[test]
    fn parses_sqlite_timestamps() {
        let ts = parse_created_at("2026-10-19 08:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-10-19T08:30:00+00:00");
        assert!(parse_created_at("yesterday").is_err());
    }
}
