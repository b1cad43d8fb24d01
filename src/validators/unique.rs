use std::collections::HashSet;

use super::Validator;

/// Accepts each value at most once for the lifetime of the instance.
///
/// The seen-set is never cleared. A new run needs a new validator.
#[derive(Debug, Default)]
pub struct UniqueValidator {
    seen: HashSet<String>,
}

impl UniqueValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for UniqueValidator {
    fn validate(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_owned())
    }
}
