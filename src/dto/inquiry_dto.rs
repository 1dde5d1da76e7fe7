use crate::models::inquiry::Inquiry;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Untrusted contact-form payload. Required string fields default to empty
/// on deserialization so a single validation pass reports every missing or
/// blank field instead of stopping at the first.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub phone: Option<String>,

    pub check_in: Option<String>,

    pub check_out: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl NewInquiry {
    /// Lenient parse of an untrusted JSON body. Wrong-typed fields are
    /// collected alongside missing/blank ones so the response names every
    /// failing field instead of stopping at the first serde error.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let inquiry = Self {
            first_name: required_text(payload, "firstName", "first_name", &mut errors),
            last_name: required_text(payload, "lastName", "last_name", &mut errors),
            email: required_text(payload, "email", "email", &mut errors),
            phone: optional_text(payload, "phone", "phone", &mut errors),
            check_in: optional_text(payload, "checkIn", "check_in", &mut errors),
            check_out: optional_text(payload, "checkOut", "check_out", &mut errors),
            message: required_text(payload, "message", "message", &mut errors),
        };

        if let Err(derived) = inquiry.validate() {
            let typed: Vec<&str> = errors.field_errors().keys().copied().collect();
            for (field, issues) in derived.field_errors() {
                // A wrong-typed field already has its own entry.
                if typed.contains(&field) {
                    continue;
                }
                for issue in issues {
                    errors.add(field, issue.clone());
                }
            }
        }

        if errors.is_empty() {
            Ok(inquiry)
        } else {
            Err(errors)
        }
    }
}

fn type_error() -> ValidationError {
    let mut err = ValidationError::new("invalid_type");
    err.message = Some(Cow::Borrowed("Expected a string"));
    err
}

fn required_text(
    payload: &serde_json::Value,
    key: &str,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> String {
    match payload.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(_) => {
            errors.add(field, type_error());
            String::new()
        }
    }
}

fn optional_text(
    payload: &serde_json::Value,
    key: &str,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match payload.get(key) {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(field, type_error());
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryCreatedResponse {
    pub success: bool,
    pub inquiry: Inquiry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryListResponse {
    pub success: bool,
    pub inquiries: Vec<Inquiry>,
}
