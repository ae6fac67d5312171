use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::validation::{required_text, ValidationErrors};

pub const SUBJECT_MAX: usize = 200;
pub const MESSAGE_MAX: usize = 2000;

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactInput {
    pub fn into_new(self) -> Result<NewContact, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = self
            .email
            .map(|e| e.trim().to_lowercase())
            .unwrap_or_default();
        errors.ensure(
            EmailAddress::is_valid(&email),
            "email",
            "Please provide a valid email",
        );
        let subject = required_text(&mut errors, "subject", "Subject", self.subject, SUBJECT_MAX);
        let message = required_text(&mut errors, "message", "Message", self.message, MESSAGE_MAX);

        match (subject, message) {
            (Some(subject), Some(message)) if errors.is_empty() => Ok(NewContact {
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        let new = ContactInput {
            email: Some("  Fan@Example.COM ".into()),
            subject: Some("Hi".into()),
            message: Some("Hello there".into()),
        }
        .into_new()
        .unwrap();

        assert_eq!(new.email, "fan@example.com");
    }

    #[test]
    fn every_field_is_checked() {
        let err = ContactInput {
            email: Some("not-an-email".into()),
            subject: None,
            message: Some("m".repeat(2001)),
        }
        .into_new()
        .unwrap_err();

        let messages: Vec<_> = err.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Please provide a valid email",
                "Subject is required",
                "Message cannot exceed 2000 characters",
            ]
        );
    }
}
