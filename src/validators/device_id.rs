use once_cell::sync::Lazy;
use regex::Regex;

use super::Validator;

// Six groups of two uppercase hex digits, e.g. `B0-5A-7B-0B-32-BD`.
static DEVICE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-F]{2}(-[0-9A-F]{2}){5}$").expect("Device id pattern is valid")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceIdValidator;

impl Validator for DeviceIdValidator {
    fn validate(&mut self, value: &str) -> bool {
        DEVICE_ID.is_match(value)
    }
}
