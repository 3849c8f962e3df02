//! Contact form rules and the simulated delivery outcome.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for blank fields and
    /// [`ContactError::InvalidEmail`] when the email lacks an `@`.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Progress of a contact submission as shown under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ContactStatus {
    #[must_use]
    pub const fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }

    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("Message sent successfully!"),
            Self::Failed => Some("Failed to send message. Please try again."),
            Self::Idle | Self::Sending => None,
        }
    }

    #[must_use]
    pub const fn from_outcome(outcome: &Result<(), ContactError>) -> Self {
        if outcome.is_ok() { Self::Sent } else { Self::Failed }
    }
}

/// Stand-in for a real transport: nothing leaves the page. Succeeds exactly
/// when the form validates.
///
/// # Errors
///
/// Propagates [`ContactForm::validate`] failures.
pub fn deliver(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> ContactForm {
        ContactForm {
            name: "Wen".into(),
            email: email.into(),
            message: "Do you ship to Chengdu?".into(),
        }
    }

    #[test]
    fn delivery_requires_at_sign() {
        assert_eq!(deliver(&form("wen@example.com")), Ok(()));
        assert_eq!(deliver(&form("wen.example.com")), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn blank_fields_are_reported_by_name() {
        let mut blank = form("wen@example.com");
        blank.message = " ".into();
        assert_eq!(blank.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn status_follows_outcome() {
        assert_eq!(ContactStatus::from_outcome(&Ok(())), ContactStatus::Sent);
        let failed = ContactStatus::from_outcome(&Err(ContactError::InvalidEmail));
        assert_eq!(failed, ContactStatus::Failed);
        assert_eq!(failed.message(), Some("Failed to send message. Please try again."));
        assert!(ContactStatus::Sending.is_sending());
        assert_eq!(ContactStatus::Idle.message(), None);
    }
}
