//! # Validation
//!
//! Field-format checks and form-level validation of raw user input.
//!
//! The three `validate_*` functions are pure predicates. [`RecordInput::validate`]
//! runs the full set of form checks, in a fixed order, and is the only way the
//! command layer turns user input into a [`Record`]. The store itself never
//! validates: anything reaching `RecordStore::add` has already passed here.

use crate::model::{parse_date, today, Record, Status, DATE_FORMAT};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{4}$").expect("valid regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?[0-9]{9,15}$").expect("valid regex"));

/// Two uppercase ASCII letters followed by four ASCII digits, nothing else.
pub fn validate_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional `+`, optional leading `1`, then 9 to 15 digits.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("Invalid ID format. Use XX0000 format.")]
    InvalidId,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid phone format.")]
    InvalidPhone,

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidHireDate,

    #[error("Invalid status: {0}. Use one of Active, Inactive, On Leave, Terminated.")]
    InvalidStatus(String),
}

/// Raw, unvalidated form data for one record. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub hire_date: String,
    pub status: String,
}

impl RecordInput {
    /// Prefills a form from an existing record, as an edit form would.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            role: record.role.clone(),
            department: record.department.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            hire_date: record.hire_date.format(DATE_FORMAT).to_string(),
            status: record.status.to_string(),
        }
    }

    /// Checks required fields, then id, email, phone, hire date and status, in
    /// that order, stopping at the first failure. Values are trimmed.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        let required = [
            ("Id", &self.id),
            ("Name", &self.name),
            ("Role", &self.role),
            ("Department", &self.department),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Required(label));
            }
        }

        let id = self.id.trim();
        if !validate_id(id) {
            return Err(ValidationError::InvalidId);
        }

        let email = self.email.trim();
        if !email.is_empty() && !validate_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !validate_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        let hire_date = match self.hire_date.trim() {
            "" => today(),
            raw => parse_date(raw).ok_or(ValidationError::InvalidHireDate)?,
        };

        let status = match self.status.trim() {
            "" => Status::default(),
            raw => raw
                .parse::<Status>()
                .map_err(|_| ValidationError::InvalidStatus(raw.to_string()))?,
        };

        Ok(Record::new(id, self.name.trim(), self.role.trim(), self.department.trim())
            .with_email(email)
            .with_phone(phone)
            .with_hire_date(hire_date)
            .with_status(status))
    }
}
