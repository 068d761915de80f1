//! # Request payloads and boundary validation
//!
//! [`AreaPayload`] and [`EmployeePayload`] are the wire schema for request bodies.
//! Every field is optional at the serde level so that a missing field surfaces as a
//! [`FieldError`] from `validate` instead of an opaque deserializer rejection. All
//! problems are collected into one [`ValidationErrors`] list.
//!
//! `areaId` is accepted either as a JSON number or a numeric string ([`AreaRef`]),
//! because HTML select controls submit their value as text.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{NewArea, NewEmployee};

/// A single rejected field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field rejected while validating a payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Body of `POST /areas` and `PUT /areas/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AreaPayload {
    pub fn validate(self) -> Result<NewArea, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = required_text(self.name, "name", &mut errors);
        match name {
            Some(name) if errors.is_empty() => Ok(NewArea { name }),
            _ => Err(errors),
        }
    }
}

/// An area reference as submitted by a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaRef {
    Number(i64),
    Text(String),
}

impl AreaRef {
    /// Resolve to a positive database id.
    pub fn to_id(&self) -> Option<i32> {
        let raw = match self {
            AreaRef::Number(n) => *n,
            AreaRef::Text(s) => s.trim().parse().ok()?,
        };
        i32::try_from(raw).ok().filter(|id| *id > 0)
    }
}

impl From<i32> for AreaRef {
    fn from(id: i32) -> Self {
        AreaRef::Number(id.into())
    }
}

/// Body of `POST /employees` and `PUT /employees/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_developer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaRef>,
}

impl EmployeePayload {
    pub fn validate(self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let full_name = required_text(self.full_name, "fullName", &mut errors);
        let dni = required_text(self.dni, "dni", &mut errors);

        let birth_date = match self.birth_date.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push("birthDate", "is required");
                None
            }
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.push("birthDate", "must be a date in YYYY-MM-DD format");
                }
                parsed
            }
        };

        if self.is_developer.is_none() {
            errors.push("isDeveloper", "is required");
        }

        let area_id = match &self.area_id {
            None => {
                errors.push("areaId", "is required");
                None
            }
            Some(area) => {
                let id = area.to_id();
                if id.is_none() {
                    errors.push("areaId", "must be a positive integer");
                }
                id
            }
        };

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        match (full_name, dni, birth_date, self.is_developer, area_id) {
            (Some(full_name), Some(dni), Some(birth_date), Some(is_developer), Some(area_id))
                if errors.is_empty() =>
            {
                Ok(NewEmployee {
                    full_name,
                    dni,
                    birth_date,
                    is_developer,
                    description,
                    area_id,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required_text(value: Option<String>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    if value.is_none() {
        errors.push(field, "is required");
    }
    value
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the date part.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
