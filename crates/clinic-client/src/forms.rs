use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9\s\-\+\(\)]+$").unwrap();
}

/// Shown when any field fails pre-submission validation.
pub const INVALID_NOTICE: &str = "Please fill in all required fields correctly.";

/// Input type of a form control; decides which format rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    Textarea,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Mirrors the `is-invalid` marker on the rendered control.
    pub invalid: bool,
}

impl FormField {
    pub fn new(name: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required,
            value: String::new(),
            invalid: false,
        }
    }

    /// Full pre-submission check. Only required fields are checked.
    pub fn is_valid(&self) -> bool {
        if !self.required {
            return true;
        }

        let value = self.value.trim();
        if value.is_empty() {
            return false;
        }

        match self.kind {
            FieldKind::Email => is_valid_email(value),
            FieldKind::Tel => is_valid_phone(value),
            _ => true,
        }
    }

    /// Real-time check when the control loses focus: required and empty only.
    pub fn check_on_blur(&mut self) -> bool {
        self.invalid = self.required && self.value.trim().is_empty();
        !self.invalid
    }

    /// Typing into a flagged control clears the flag.
    pub fn on_input(&mut self, value: &str) {
        self.value = value.to_string();
        self.invalid = false;
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// A form on the page: the endpoint it posts to and its controls.
#[derive(Debug, Clone)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Appointment,
    Contact,
}

impl FormKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Appointment => "/api/appointments",
            FormKind::Contact => "/api/contact",
        }
    }

    /// Text rendered into the form once the server acknowledges it.
    pub fn sent_notice(self) -> &'static str {
        match self {
            FormKind::Appointment => "Appointment scheduled successfully!",
            FormKind::Contact => "Your message has been sent. Thank you!",
        }
    }
}

impl Form {
    /// The appointment form as laid out on the home page.
    pub fn appointment() -> Self {
        Self {
            kind: FormKind::Appointment,
            fields: vec![
                FormField::new("name", FieldKind::Text, true),
                FormField::new("email", FieldKind::Email, true),
                FormField::new("phone", FieldKind::Tel, true),
                FormField::new("date", FieldKind::Date, true),
                FormField::new("department", FieldKind::Select, true),
                FormField::new("doctor", FieldKind::Select, true),
                FormField::new("message", FieldKind::Textarea, false),
            ],
        }
    }

    pub fn contact() -> Self {
        Self {
            kind: FormKind::Contact,
            fields: vec![
                FormField::new("name", FieldKind::Text, true),
                FormField::new("email", FieldKind::Email, true),
                FormField::new("subject", FieldKind::Text, true),
                FormField::new("message", FieldKind::Textarea, true),
            ],
        }
    }

    /// Types `value` into the named field. Returns `false`, leaving the form
    /// untouched, when the form has no such field.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.on_input(value);
                true
            }
            None => false,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Re-run every check, reset and re-apply the invalid markers, and
    /// return the names of the fields that failed.
    pub fn validate(&mut self) -> Vec<String> {
        let mut failed = Vec::new();
        for field in &mut self.fields {
            field.invalid = !field.is_valid();
            if field.invalid {
                failed.push(field.name.clone());
            }
        }
        failed
    }

    /// Field name to value, the way the browser collects form entries.
    pub fn entries(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value.clone())))
            .collect()
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = false;
        }
    }
}
