//! Policy registry module
//!
//! Holds the process-wide current policy and its lazy default.

use std::sync::{Arc, RwLock};

use crate::default_policy::DefaultPolicy;
use crate::policy::Policy;

static CURRENT_POLICY: RwLock<Option<Arc<dyn Policy>>> = RwLock::new(None);

/// Sets the current policy.
///
/// Unconditionally replaces the process-wide current policy. Pass `None`
/// to clear the override, so that the next [`current_policy`] call
/// installs and returns the default policy again.
///
/// # Example
///
/// ```rust,ignore
/// // Install a custom policy
/// pwd_policy::set_current_policy(Some(Arc::new(MyPolicy)));
///
/// // Revert to the built-in default
/// pwd_policy::set_current_policy(None);
/// ```
pub fn set_current_policy(policy: Option<Arc<dyn Policy>>) {
    #[cfg(feature = "tracing")]
    let installed = policy.is_some();

    {
        let mut guard = CURRENT_POLICY.write().unwrap();
        *guard = policy;
    }

    #[cfg(feature = "tracing")]
    if installed {
        tracing::info!("Custom password policy installed");
    } else {
        tracing::info!("Password policy reset to lazy default");
    }
}

/// Returns the current policy.
///
/// If no current policy has been set, a [`DefaultPolicy`] is installed as
/// the current policy and returned. Subsequent calls return the same
/// cached instance until [`set_current_policy`] is called.
///
/// The install happens under the write lock, so concurrent first reads
/// all observe one and the same default instance.
pub fn current_policy() -> Arc<dyn Policy> {
    {
        let guard = CURRENT_POLICY.read().unwrap();
        if let Some(policy) = guard.as_ref() {
            return Arc::clone(policy);
        }
    }

    let mut guard = CURRENT_POLICY.write().unwrap();
    let policy = guard.get_or_insert_with(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!("Installing default password policy");
        Arc::new(DefaultPolicy)
    });
    Arc::clone(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyError;
    use secrecy::SecretString;
    use serial_test::serial;

    struct RejectAll;

    impl Policy for RejectAll {
        fn check_pwd(&self, _password: &SecretString) -> Result<(), PolicyError> {
            Err(PolicyError::IllegalPassword("No password is good enough".to_string()))
        }
    }

    #[test]
    #[serial]
    fn test_current_policy_installs_default() {
        set_current_policy(None);

        let policy = current_policy();
        let pwd = SecretString::new("abcde1".to_string().into());
        assert!(policy.check_pwd(&pwd).is_ok());
    }

    #[test]
    #[serial]
    fn test_current_policy_caches_default() {
        set_current_policy(None);

        let first = current_policy();
        let second = current_policy();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    #[serial]
    fn test_set_current_policy_overrides_default() {
        set_current_policy(None);
        let custom: Arc<dyn Policy> = Arc::new(RejectAll);

        set_current_policy(Some(Arc::clone(&custom)));

        let active = current_policy();
        assert!(Arc::ptr_eq(&active, &custom));

        set_current_policy(None);
    }

    #[test]
    #[serial]
    fn test_reset_reinstalls_fresh_default() {
        set_current_policy(None);
        let old_default = current_policy();

        let custom: Arc<dyn Policy> = Arc::new(RejectAll);
        set_current_policy(Some(Arc::clone(&custom)));
        set_current_policy(None);

        let new_default = current_policy();
        assert!(!Arc::ptr_eq(&new_default, &custom));
        assert!(!Arc::ptr_eq(&new_default, &old_default));

        let pwd = SecretString::new("abcde1".to_string().into());
        assert!(new_default.check_pwd(&pwd).is_ok());

        set_current_policy(None);
    }

    #[test]
    #[serial]
    fn test_concurrent_first_reads_share_one_default() {
        set_current_policy(None);

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(current_policy))
            .collect();
        let policies: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("Thread panicked"))
            .collect();

        let first = &policies[0];
        assert!(policies.iter().all(|p| Arc::ptr_eq(p, first)));

        set_current_policy(None);
    }
}
