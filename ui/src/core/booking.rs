//! Session booking request captured by the sessions page.
//!
//! There is no submission backend yet: a complete request is logged and the
//! form shows a confirmation. Only the presence of required fields is
//! checked; formats (phone, email) are left to the browser input types.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    Name,
    Phone,
    Email,
    ChildAge,
    Service,
    Message,
}

impl BookingField {
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Email,
        BookingField::ChildAge,
        BookingField::Service,
        BookingField::Message,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, BookingField::Message)
    }

    /// Form control id / name.
    pub fn id(self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Email => "email",
            BookingField::ChildAge => "childAge",
            BookingField::Service => "service",
            BookingField::Message => "message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("missing required fields: {}", list_ids(.0))]
    MissingFields(Vec<BookingField>),
}

fn list_ids(fields: &[BookingField]) -> String {
    fields.iter().map(|f| f.id()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub child_age: String,
    pub service: String,
    pub message: String,
}

impl BookingRequest {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Email => &self.email,
            BookingField::ChildAge => &self.child_age,
            BookingField::Service => &self.service,
            BookingField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Phone => self.phone = value,
            BookingField::Email => self.email = value,
            BookingField::ChildAge => self.child_age = value,
            BookingField::Service => self.service = value,
            BookingField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BookingError::MissingFields(missing))
        }
    }

    /// Validate and hand the request off. Today that means logging it.
    pub fn submit(&self) -> Result<(), BookingError> {
        self.validate()?;
        match serde_json::to_string(self) {
            Ok(payload) => tracing::info!(%payload, "booking form submitted"),
            Err(err) => tracing::info!(request = ?self, "booking form submitted ({err})"),
        }
        Ok(())
    }
}
