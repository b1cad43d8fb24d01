use super::Validator;

/// Syntactic `local@domain` check. No DNS or MX lookup is performed.
///
/// `validator::validate_email` lets dots through anywhere in the local part,
/// so dot-atom placement (no leading, trailing or doubled dot) is checked here.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&mut self, value: &str) -> bool {
        validator::validate_email(value) && has_dot_atom_local_part(value)
    }
}

fn has_dot_atom_local_part(value: &str) -> bool {
    match value.rsplit_once('@') {
        Some((local, _)) => local.split('.').all(|atom| !atom.is_empty()),
        None => false,
    }
}
