//! Length rule - checks password minimum length.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 6;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}
