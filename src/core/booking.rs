//! # Appointment Requests
//!
//! The "Reservar cita" form shown in the detail view.
//!
//! ```text
//! Editing ──valid submit──▶ Submitted   (terminal)
//!    ▲  │
//!    └──┘ invalid submit: stays Editing, error reported
//! ```
//!
//! Submission is a local stub. A valid request is handed back to the caller
//! as `Effect::RecordBooking` and written to the log; nothing is sent over
//! the network, stored, or retried. It does not book an appointment.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::core::vehicle::VehicleId;

/// At least six characters, each a digit, whitespace, `+` or `-`.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+0-9\s-]{6,}$").expect("phone pattern compiles"));

/// `YYYY-MM-DD`, zero-padded. chrono alone also accepts `2026-1-5`.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub notes: String,
}

/// Form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Phone,
    Date,
    Notes,
}

impl BookingField {
    pub const ALL: [BookingField; 4] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Date,
        BookingField::Notes,
    ];

    pub fn next(self) -> BookingField {
        match self {
            BookingField::Name => BookingField::Phone,
            BookingField::Phone => BookingField::Date,
            BookingField::Date => BookingField::Notes,
            BookingField::Notes => BookingField::Name,
        }
    }

    pub fn prev(self) -> BookingField {
        match self {
            BookingField::Name => BookingField::Notes,
            BookingField::Phone => BookingField::Name,
            BookingField::Date => BookingField::Phone,
            BookingField::Notes => BookingField::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingField::Name => "Nombre",
            BookingField::Phone => "Teléfono",
            BookingField::Date => "Fecha preferida",
            BookingField::Notes => "Notas",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BookingField::Name => "Tu nombre",
            BookingField::Phone => "Tu teléfono",
            BookingField::Date => "AAAA-MM-DD",
            BookingField::Notes => "Horario, dudas, etc.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("El nombre es obligatorio")]
    MissingName,
    #[error("El teléfono es obligatorio")]
    MissingPhone,
    #[error("Teléfono no válido: usa al menos 6 dígitos, espacios, + o -")]
    InvalidPhone,
    #[error("La fecha es obligatoria")]
    MissingDate,
    #[error("Fecha no válida: {0} (formato AAAA-MM-DD)")]
    InvalidDate(String),
}

impl BookingError {
    /// The field the visitor has to fix.
    pub fn field(&self) -> BookingField {
        match self {
            BookingError::MissingName => BookingField::Name,
            BookingError::MissingPhone | BookingError::InvalidPhone => BookingField::Phone,
            BookingError::MissingDate | BookingError::InvalidDate(_) => BookingField::Date,
        }
    }
}

/// A validated appointment request, ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub reference: String,
    pub vehicle_id: VehicleId,
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Editing,
    Submitted(BookingRequest),
}

impl BookingStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, BookingStatus::Submitted(_))
    }
}

impl BookingForm {
    pub fn field(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Date => &self.date,
            BookingField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Phone => &mut self.phone,
            BookingField::Date => &mut self.date,
            BookingField::Notes => &mut self.notes,
        }
    }

    /// Check every field in form order and build the request for `vehicle_id`.
    pub fn validate(&self, vehicle_id: &VehicleId) -> Result<BookingRequest, BookingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BookingError::MissingName);
        }

        if self.phone.is_empty() {
            return Err(BookingError::MissingPhone);
        }
        if !PHONE_PATTERN.is_match(&self.phone) {
            return Err(BookingError::InvalidPhone);
        }

        let date = self.date.trim();
        if date.is_empty() {
            return Err(BookingError::MissingDate);
        }
        if !DATE_SHAPE.is_match(date) {
            return Err(BookingError::InvalidDate(date.to_string()));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate(date.to_string()))?;

        let notes = self.notes.trim();
        Ok(BookingRequest {
            reference: uuid::Uuid::new_v4().to_string(),
            vehicle_id: vehicle_id.clone(),
            name: name.to_string(),
            phone: self.phone.clone(),
            date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
