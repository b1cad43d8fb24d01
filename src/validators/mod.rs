pub use channel::*;
pub use device_id::*;
pub use email::*;
pub use unique::*;

mod channel;
mod device_id;
mod email;
mod unique;

/// A pass/fail check over a single field value.
///
/// Takes `&mut self` so stateful checks such as [`UniqueValidator`] can
/// remember what they have already accepted.
pub trait Validator {
    fn validate(&mut self, value: &str) -> bool;
}
