//! Submission schema for waitlist signups.
//!
//! Parses an untyped JSON payload into a [`NewWaitlistEntry`], collecting
//! every failing field instead of stopping at the first one. Used by the API
//! handler (server-side) and by the signup form (client-side).
//!
//! Rules:
//! - `email`: required string, must look like an email address.
//! - `organization`: optional string, `null` is treated as absent.
//! - `updates`: optional boolean, defaults to `false`.
//! - Unknown keys are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateEmail;

/// Validated submission, before storage assigns `id` and the handler
/// assigns `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWaitlistEntry {
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default)]
    pub updates: bool,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// What was wrong with it.
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

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// First error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates that the input looks like a valid email address.
///
/// No trimming: surrounding whitespace makes the address invalid. Follows
/// the `validator` crate's HTML5-style rules, which are looser than most
/// browser-side checks: consecutive dots in the local part and a dotless
/// domain are both accepted.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email()
}

impl NewWaitlistEntry {
    /// Parse and validate an untyped payload.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationErrors::new(vec![FieldError::new(
                "body",
                format!("Expected object, received {}", type_name(payload)),
            )]));
        };

        let mut errors = Vec::new();

        let email = parse_email(object, &mut errors);
        let organization = parse_organization(object, &mut errors);
        let updates = parse_updates(object, &mut errors);

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                email,
                organization,
                updates,
            }),
            _ => Err(ValidationErrors::new(errors)),
        }
    }

}

fn parse_email(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get("email") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("email", "Required"));
            None
        }
        Some(Value::String(email)) if is_valid_email(email) => Some(email.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new("email", "Invalid email"));
            None
        }
        Some(other) => {
            errors.push(expected("email", "string", other));
            None
        }
    }
}

fn parse_organization(
    object: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get("organization") {
        None | Some(Value::Null) => None,
        Some(Value::String(org)) => Some(org.clone()),
        Some(other) => {
            errors.push(expected("organization", "string", other));
            None
        }
    }
}

fn parse_updates(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> bool {
    match object.get("updates") {
        None => false,
        Some(Value::Bool(updates)) => *updates,
        Some(other) => {
            errors.push(expected("updates", "boolean", other));
            false
        }
    }
}

fn expected(field: &str, wanted: &str, got: &Value) -> FieldError {
    FieldError::new(
        field,
        format!("Expected {wanted}, received {}", type_name(got)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
