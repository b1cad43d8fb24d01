use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys a channel may require on a [`UserRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    DeviceId,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::DeviceId => "device_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as handed over by a user source.
///
/// The raw JSON value is kept as-is: no schema is enforced here, not even
/// that the record is an object. Whether a record is usable is decided by
/// each channel's validator at send time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl Default for UserRecord {
    /// An empty mapping.
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl UserRecord {
    pub fn is_mapping(&self) -> bool {
        self.0.is_object()
    }

    /// The value stored under `field`, whatever its JSON type.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.as_object()?.get(field.as_str())
    }

    /// The value under `field` if it is a string.
    pub fn get_str(&self, field: Field) -> Option<&str> {
        self.get(field)?.as_str()
    }

    /// Printable form of `field`: strings as-is, other JSON values rendered.
    pub fn text(&self, field: Field) -> Option<Cow<'_, str>> {
        match self.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with(Field::Name, name.into())
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with(Field::Email, email.into())
    }

    pub fn with_device_id(self, device_id: impl Into<String>) -> Self {
        self.with(Field::DeviceId, device_id.into())
    }

    // Non-mapping records stay untouched.
    fn with(mut self, field: Field, value: String) -> Self {
        if let Some(map) = self.0.as_object_mut() {
            map.insert(field.as_str().to_owned(), Value::String(value));
        }
        self
    }

    /// Pretty JSON of the record, printed after a failed send.
    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
