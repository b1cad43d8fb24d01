use crate::domain::{Field, UserRecord};

use super::{DeviceIdValidator, EmailValidator, UniqueValidator, Validator};

/// Why a channel validator refused a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("record is not a mapping")]
    NotAMapping,
    #[error("missing required field `{0}`")]
    MissingField(Field),
    #[error("malformed `{0}` value")]
    Malformed(Field),
    #[error("duplicate `{0}` value")]
    Duplicate(Field),
}

/// Decides whether a whole record can be sent through one channel.
pub trait RecordValidator {
    fn validate(&mut self, record: &UserRecord) -> Result<(), Rejection>;

    fn is_valid(&mut self, record: &UserRecord) -> bool {
        self.validate(record).is_ok()
    }
}

/// Shape, presence of `name` and `key`, then format, then uniqueness. Stops
/// at the first failing check, so a malformed value is never recorded as seen.
fn check_channel_field(
    record: &UserRecord,
    key: Field,
    format: &mut impl Validator,
    unique: &mut UniqueValidator,
) -> Result<(), Rejection> {
    if !record.is_mapping() {
        return Err(Rejection::NotAMapping);
    }
    record
        .get(Field::Name)
        .ok_or(Rejection::MissingField(Field::Name))?;
    let value = record.get(key).ok_or(Rejection::MissingField(key))?;
    // A present value of the wrong JSON type is malformed, not missing.
    let value = value.as_str().ok_or(Rejection::Malformed(key))?;
    if !format.validate(value) {
        return Err(Rejection::Malformed(key));
    }
    if !unique.validate(value) {
        return Err(Rejection::Duplicate(key));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct EmailChannelValidator {
    email: EmailValidator,
    unique: UniqueValidator,
}

impl EmailChannelValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordValidator for EmailChannelValidator {
    fn validate(&mut self, record: &UserRecord) -> Result<(), Rejection> {
        check_channel_field(record, Field::Email, &mut self.email, &mut self.unique)
    }
}

#[derive(Debug, Default)]
pub struct PushChannelValidator {
    device_id: DeviceIdValidator,
    unique: UniqueValidator,
}

impl PushChannelValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordValidator for PushChannelValidator {
    fn validate(&mut self, record: &UserRecord) -> Result<(), Rejection> {
        check_channel_field(record, Field::DeviceId, &mut self.device_id, &mut self.unique)
    }
}
