//! Password checker - top-level check entry point.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PolicyError;
use crate::registry::current_policy;

/// Checks a candidate password against the current policy.
///
/// Resolves the active policy from the registry (installing the default
/// policy if none has been set) and applies it to the password.
///
/// # Arguments
/// * `password` - The password to check, or `None` if the caller has none
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// - `Ok(())` if the password complies with the current policy
/// - `Err(PolicyError::MissingPassword)` if no password was supplied;
///   the policy itself is never consulted in this case
/// - `Err(PolicyError::IllegalPassword)` with the violation reason otherwise
pub fn check_password(
    password: Option<&SecretString>,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<(), PolicyError> {
    // Check cancellation before resolving the policy (async only)
    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Err(PolicyError::Cancelled);
            }
        }
    }

    let Some(pwd) = password else {
        return Err(PolicyError::MissingPassword);
    };

    current_policy().check_pwd(pwd)
}

/// Async version that sends the check outcome via channel.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: Option<&SecretString>,
    token: CancellationToken,
    tx: mpsc::Sender<Result<(), PolicyError>>,
) {
    let outcome = check_password(password, Some(token));

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
    }
}
