use chrono::{DateTime, Utc};
use email_address::{EmailAddress, Options};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored contact-form message. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ========================= Validation =========================

/// One rejected field of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidField {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contact submission has {} invalid field(s)", .0.len())]
pub struct ContactValidationError(pub Vec<InvalidField>);

/// A contact submission whose fields are trimmed and known to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl SubmitContactCommand {
    /// Trims every field and checks all of them, reporting every failure
    /// rather than stopping at the first.
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        let email = email.trim();
        let subject = subject.trim();
        let message = message.trim();

        let mut invalid = Vec::new();

        if name.is_empty() {
            invalid.push(InvalidField {
                field: "name",
                message: "name is required",
            });
        }

        if !is_deliverable_email(email) {
            invalid.push(InvalidField {
                field: "email",
                message: "valid email is required",
            });
        }

        if subject.is_empty() {
            invalid.push(InvalidField {
                field: "subject",
                message: "subject is required",
            });
        }

        if message.is_empty() {
            invalid.push(InvalidField {
                field: "message",
                message: "message is required",
            });
        }

        if !invalid.is_empty() {
            return Err(ContactValidationError(invalid));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A bare mailbox on a dotted domain: no display name, no IP literal.
fn is_deliverable_email(email: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    EmailAddress::parse_with_options(email, options).is_ok()
}
