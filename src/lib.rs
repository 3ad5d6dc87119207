//! Password policy library
//!
//! This library provides a pluggable password policy with a process-wide
//! registry and a built-in default rule.
//!
//! The default policy ensures that a password is at least six characters
//! long and contains at least one letter and at least one digit. Any type
//! implementing [`Policy`] can be installed in its place via
//! [`set_current_policy`] without touching call sites.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-based check with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::check_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Pa55word!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let outcome = check_password(Some(&password), None);
//!
//! #[cfg(not(feature = "async"))]
//! let outcome = check_password(Some(&password));
//!
//! assert!(outcome.is_ok());
//! ```

// Internal modules
mod checker;
mod default_policy;
mod policy;
mod registry;
mod rules;

// Public API
pub use checker::check_password;
pub use default_policy::DefaultPolicy;
pub use policy::{Policy, PolicyError};
pub use registry::{current_policy, set_current_policy};

#[cfg(feature = "async")]
pub use checker::check_password_tx;
