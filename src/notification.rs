use std::io::Write;

use crate::domain::UserRecord;
use crate::senders::{EmailSender, PushSender, SendError, Sender};
use crate::validators::{
    EmailChannelValidator, PushChannelValidator, RecordValidator, Rejection,
};

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid object: {0}")]
    ValidationFailed(#[from] Rejection),
    #[error("Sender failed: {0}")]
    SendFailed(#[from] SendError),
}

/// A named channel: the validator guarding it and the sender behind it.
pub struct Notification {
    name: String,
    validator: Box<dyn RecordValidator>,
    sender: Box<dyn Sender>,
}

impl Notification {
    pub fn new(
        name: impl Into<String>,
        validator: Box<dyn RecordValidator>,
        sender: Box<dyn Sender>,
    ) -> Self {
        Self {
            name: name.into(),
            validator,
            sender,
        }
    }

    /// Email channel with a fresh uniqueness scope.
    pub fn email() -> Self {
        Self::new(
            "Email",
            Box::new(EmailChannelValidator::new()),
            Box::new(EmailSender),
        )
    }

    /// Push channel with a fresh uniqueness scope.
    pub fn push() -> Self {
        Self::new(
            "Push",
            Box::new(PushChannelValidator::new()),
            Box::new(PushSender),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates `record` and, only if it passes, hands it to the sender.
    pub fn send(
        &mut self,
        record: &UserRecord,
        console: &mut dyn Write,
    ) -> Result<(), NotificationError> {
        self.validator.validate(record)?;
        self.sender.send(record, console)?;
        Ok(())
    }
}

impl std::fmt::Debug for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
