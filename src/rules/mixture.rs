//! Letter/digit mixture rule - checks for letters and digits.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one letter and one digit.
///
/// Characters are classified per their Unicode classes, in a single
/// left-to-right scan. Symbols, whitespace and other classes are allowed
/// but count as neither.
///
/// # Returns
/// - `Some(reason)` if a required character class is missing
/// - `None` if both letters and digits are present
pub fn letter_digit_rule(password: &SecretString) -> RuleResult {
    let mut has_letter = false;
    let mut has_digit = false;
    for c in password.expose_secret().chars() {
        if c.is_alphabetic() {
            has_letter = true;
        } else if c.is_numeric() {
            has_digit = true;
        }
    }

    let missing: Vec<_> = vec![
        if !has_letter { Some("letters") } else { None },
        if !has_digit { Some("digits") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
