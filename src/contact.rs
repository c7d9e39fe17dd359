use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please write a message")]
    MissingMessage,
    #[error("A message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

/// Submission lifecycle for the contact form. There is no backend: the
/// caller waits a fixed delay between `begin` and `complete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: SubmitState,
}

impl ContactForm {
    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn begin(&mut self, msg: &ContactMessage) -> Result<(), ContactError> {
        if self.state == SubmitState::Submitting {
            return Err(ContactError::Busy);
        }
        msg.validate()?;
        self.state = SubmitState::Submitting;
        Ok(())
    }

    /// Returns `true` if a pending submission was marked as sent.
    pub fn complete(&mut self) -> bool {
        if self.state == SubmitState::Submitting {
            self.state = SubmitState::Sent;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        if self.state == SubmitState::Sent {
            self.state = SubmitState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> ContactMessage {
        ContactMessage {
            name: "Rishab Tripathi".to_string(),
            email: "rishab@example.com".to_string(),
            subject: String::new(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(msg().validate(), Ok(()));
        let cases = [
            (ContactMessage { name: "  ".into(), ..msg() }, ContactError::MissingName),
            (ContactMessage { email: "".into(), ..msg() }, ContactError::MissingEmail),
            (ContactMessage { email: "nope".into(), ..msg() }, ContactError::InvalidEmail),
            (ContactMessage { email: "a@b".into(), ..msg() }, ContactError::InvalidEmail),
            (ContactMessage { email: "a b@c.d".into(), ..msg() }, ContactError::InvalidEmail),
            (ContactMessage { email: "@c.io".into(), ..msg() }, ContactError::InvalidEmail),
            (ContactMessage { message: "\n".into(), ..msg() }, ContactError::MissingMessage),
        ];
        for (m, err) in cases {
            assert_eq!(m.validate(), Err(err), "{m:?}");
        }
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin(&msg()), Ok(()));
        assert_eq!(form.state(), SubmitState::Submitting);
        assert_eq!(form.begin(&msg()), Err(ContactError::Busy));
        assert!(form.complete());
        assert!(!form.complete());
        assert_eq!(form.state(), SubmitState::Sent);
        form.dismiss();
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_invalid_message_keeps_idle() {
        let mut form = ContactForm::default();
        let bad = ContactMessage::default();
        assert_eq!(form.begin(&bad), Err(ContactError::MissingName));
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(!form.complete());
    }
}
