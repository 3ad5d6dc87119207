//! The `Policy` capability and its error taxonomy.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Password does not comply with the current policy: {0}")]
    IllegalPassword(String),
    #[error("No password was supplied")]
    MissingPassword,
    #[cfg(feature = "async")]
    #[error("Password check was cancelled")]
    Cancelled,
}

/// A pluggable password-validation rule.
///
/// Implementations are installed process-wide via
/// [`set_current_policy`](crate::set_current_policy) and must therefore be
/// shareable across threads.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{Policy, PolicyError};
/// use secrecy::{ExposeSecret, SecretString};
///
/// struct NoSpaces;
///
/// impl Policy for NoSpaces {
///     fn check_pwd(&self, password: &SecretString) -> Result<(), PolicyError> {
///         if password.expose_secret().contains(' ') {
///             return Err(PolicyError::IllegalPassword(
///                 "Password must not contain spaces".to_string(),
///             ));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Policy: Send + Sync {
    /// Checks the given password for compliance to this policy.
    ///
    /// # Returns
    /// - `Ok(())` if the password complies
    /// - `Err(PolicyError::IllegalPassword)` with the violation reason otherwise
    fn check_pwd(&self, password: &SecretString) -> Result<(), PolicyError>;
}
