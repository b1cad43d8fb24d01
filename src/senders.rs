use std::borrow::Cow;
use std::io::Write;

use crate::domain::{Field, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("record is missing `{0}`")]
    MissingField(Field),
    #[error("could not write to the console")]
    Console(#[from] std::io::Error),
}

/// The side effect of dispatching a validated record to a channel.
///
/// Real delivery is out of scope: senders write a confirmation line to
/// `console`.
pub trait Sender {
    fn send(&self, record: &UserRecord, console: &mut dyn Write) -> Result<(), SendError>;
}

fn require(record: &UserRecord, field: Field) -> Result<Cow<'_, str>, SendError> {
    record.text(field).ok_or(SendError::MissingField(field))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailSender;

impl Sender for EmailSender {
    #[tracing::instrument(name = "Sending email", skip(self, record, console))]
    fn send(&self, record: &UserRecord, console: &mut dyn Write) -> Result<(), SendError> {
        let name = require(record, Field::Name)?;
        let email = require(record, Field::Email)?;
        writeln!(console, "Email {} has been sent to user {}", email, name)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PushSender;

impl Sender for PushSender {
    #[tracing::instrument(name = "Sending push notification", skip(self, record, console))]
    fn send(&self, record: &UserRecord, console: &mut dyn Write) -> Result<(), SendError> {
        let name = require(record, Field::Name)?;
        let device_id = require(record, Field::DeviceId)?;
        writeln!(
            console,
            "Push notification has been sent to user {} with device_id {}",
            name, device_id
        )?;
        Ok(())
    }
}
