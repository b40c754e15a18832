mod config;
mod controller;
mod transport;
mod validate;

pub use config::{ConfigError, ContactConfig};
pub use controller::{ContactForm, GENERIC_FAILURE_MESSAGE};
pub use transport::{ContactTransport, HttpTransport, TransportError};
pub use validate::validate;

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four inputs of the contact form.
///
/// Variants are declared in the order the form is rendered and validated, and
/// the derived `Ord` relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Description,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Description];

    /// Name used both in the JSON payload and as the DOM `name`/`id`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Subject => "Project Subject *",
            Self::Description => "Project Details *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's your project about?",
            Self::Description => "Tell me about your project vision and requirements...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "description" => Ok(Self::Description),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Live values of the contact form inputs, stored exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub description: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field validation messages. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Normalized outcome of one exchange with the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SubmissionResult {
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            status,
            errors: Some(vec![message.clone()]),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "message".parse::<Field>(),
            Err(UnknownField("message".to_string()))
        );
    }

    #[test]
    fn test_form_data_serializes_with_wire_keys() {
        let form = ContactFormData {
            name: " Jo ".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Hello".to_string(),
            description: "Some project details".to_string(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": " Jo ",
                "email": "jo@example.com",
                "subject": "Hello",
                "description": "Some project details",
            })
        );
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Description, "d");
        errors.insert(Field::Name, "n");
        errors.insert(Field::Subject, "s");
        let fields = errors.iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(fields, vec![Field::Name, Field::Subject, Field::Description]);
    }

    #[test]
    fn test_failure_result_repeats_message_in_errors() {
        let res = SubmissionResult::failure(500, "boom");
        assert!(!res.success);
        assert_eq!(res.status, 500);
        assert_eq!(res.message, "boom");
        assert_eq!(res.errors, Some(vec!["boom".to_string()]));
    }

    #[test]
    fn test_success_body_without_errors_parses() {
        let res: SubmissionResult =
            serde_json::from_str(r#"{"success":true,"status":200,"message":"ok"}"#).unwrap();
        assert!(res.success);
        assert_eq!(res.errors, None);
    }
}
