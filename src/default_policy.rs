//! Default password policy - the built-in rule set.

use secrecy::SecretString;

use crate::policy::{Policy, PolicyError};
use crate::rules::{length_rule, letter_digit_rule, RuleResult};

/// The built-in password policy.
///
/// Ensures that the password is at least six characters long and contains
/// at least one letter and at least one digit. Installed automatically by
/// the registry when no other policy has been set.
#[derive(Debug, Default)]
pub struct DefaultPolicy;

impl Policy for DefaultPolicy {
    fn check_pwd(&self, password: &SecretString) -> Result<(), PolicyError> {
        // Rules run in sequence; the first violation rejects the password.
        let rules: [(&str, fn(&SecretString) -> RuleResult); 2] = [
            ("length", length_rule),
            ("mixture", letter_digit_rule),
        ];

        for (rule_name, rule_fn) in rules {
            if let Some(reason) = rule_fn(password) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by {} rule", rule_name);

                return Err(PolicyError::IllegalPassword(reason));
            }
        }
        Ok(())
    }
}
